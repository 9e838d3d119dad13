//! Fixed colour palette used as pot themes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::domain::pot::Pot;

/// A named colour and its hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: &'static str,
    pub code: &'static str,
}

impl ColorEntry {
    const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    pub fn is_placeholder(&self) -> bool {
        self.code == PALETTE[0].code
    }
}

/// Palette in menu order. Entry 0 is the "nothing chosen yet" placeholder
/// and is never a valid theme.
pub static PALETTE: [ColorEntry; 16] = [
    ColorEntry::new("Choose Color", "#000"),
    ColorEntry::new("Green", "#277C78"),
    ColorEntry::new("Yellow", "#F2CDAC"),
    ColorEntry::new("Cyan", "#82C9D7"),
    ColorEntry::new("Navy", "#626070"),
    ColorEntry::new("Red", "#C94736"),
    ColorEntry::new("Purple", "#826CB0"),
    ColorEntry::new("Turquoise", "#597C7C"),
    ColorEntry::new("Brown", "#93674F"),
    ColorEntry::new("Magenta", "#934F6F"),
    ColorEntry::new("Blue", "#3F82B2"),
    ColorEntry::new("Navy", "#97A0AC"),
    ColorEntry::new("Army Green", "#7F9161"),
    ColorEntry::new("Pink", "#AF81BA"),
    ColorEntry::new("Gold", "#CAB361"),
    ColorEntry::new("Orange", "#BE6C49"),
];

static BY_CODE: Lazy<HashMap<String, &'static ColorEntry>> = Lazy::new(|| {
    PALETTE
        .iter()
        .map(|entry| (normalize(entry.code), entry))
        .collect()
});

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn same_code(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Finds a palette entry by hex code (case-insensitive).
pub fn lookup(code: &str) -> Option<&'static ColorEntry> {
    BY_CODE.get(&normalize(code)).copied()
}

/// The placeholder entry shown before a colour is picked.
pub fn placeholder() -> &'static ColorEntry {
    &PALETTE[0]
}

/// Colours a pot may use, in menu order.
pub fn selectable() -> impl Iterator<Item = &'static ColorEntry> {
    PALETTE.iter().skip(1)
}

/// Returns the palette entry when `code` is a real, selectable theme.
pub fn selectable_entry(code: &str) -> Option<&'static ColorEntry> {
    lookup(code).filter(|entry| !entry.is_placeholder())
}

/// Whether any pot other than `excluding` already uses `code` as its theme.
pub fn is_in_use<'a>(
    code: &str,
    pots: impl IntoIterator<Item = &'a Pot>,
    excluding: Option<Uuid>,
) -> bool {
    pots.into_iter()
        .filter(|pot| excluding != Some(pot.id))
        .any(|pot| same_code(&pot.theme, code))
}

/// One row of the theme picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    pub position: usize,
    pub entry: &'static ColorEntry,
    pub selected: bool,
    pub already_used: bool,
}

impl ColorOption {
    pub fn is_disabled(&self) -> bool {
        self.already_used
    }
}

/// Builds the theme picker rows. A colour held by another pot is disabled
/// unless it is the current selection.
pub fn color_menu<'a>(
    pots: impl IntoIterator<Item = &'a Pot> + Clone,
    selected: Option<&str>,
    excluding: Option<Uuid>,
) -> Vec<ColorOption> {
    selectable()
        .enumerate()
        .map(|(index, entry)| {
            let is_selected = selected.is_some_and(|code| same_code(code, entry.code));
            let used = is_in_use(entry.code, pots.clone(), excluding);
            ColorOption {
                position: index + 1,
                entry,
                selected: is_selected,
                already_used: used && !is_selected,
            }
        })
        .collect()
}

/// Resolves user input to a selectable colour: a 1-based menu position, a hex
/// code (the `#` is optional), or a colour name that is unambiguous.
pub fn resolve(token: &str) -> Result<&'static ColorEntry, String> {
    let token = token.trim();
    if let Ok(position) = token.parse::<usize>() {
        return selectable()
            .nth(position.wrapping_sub(1))
            .ok_or_else(|| format!("Color position must be between 1 and {}", PALETTE.len() - 1));
    }
    if token.starts_with('#') {
        return selectable_entry(token).ok_or_else(|| format!("Unknown color code `{token}`"));
    }
    let matches: Vec<&'static ColorEntry> = selectable()
        .filter(|entry| entry.name.eq_ignore_ascii_case(token))
        .collect();
    match matches.as_slice() {
        [single] => Ok(single),
        [] => selectable_entry(&format!("#{token}"))
            .ok_or_else(|| format!("Unknown color `{token}`")),
        many => Err(format!(
            "Color name `{token}` is ambiguous; use one of: {}",
            many.iter()
                .map(|entry| entry.code)
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pot::PotInput;

    fn pots() -> Vec<Pot> {
        vec![
            Pot::new(PotInput::new("Savings", 2000.0, "#277C78")),
            Pot::new(PotInput::new("Gift", 60.0, "#82C9D7")),
        ]
    }

    #[test]
    fn palette_has_placeholder_and_fifteen_colors() {
        assert!(placeholder().is_placeholder());
        assert_eq!(selectable().count(), 15);
        assert!(selectable_entry("#000").is_none());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("#277c78").map(|entry| entry.name), Some("Green"));
        assert!(lookup("#123456").is_none());
    }

    #[test]
    fn in_use_excludes_the_edited_pot() {
        let pots = pots();
        assert!(is_in_use("#277C78", &pots, None));
        assert!(!is_in_use("#277C78", &pots, Some(pots[0].id)));
        assert!(!is_in_use("#C94736", &pots, None));
    }

    #[test]
    fn menu_marks_used_colors_except_selection() {
        let pots = pots();
        let menu = color_menu(&pots, Some("#82C9D7"), None);
        let green = menu.iter().find(|o| o.entry.code == "#277C78").unwrap();
        let cyan = menu.iter().find(|o| o.entry.code == "#82C9D7").unwrap();
        assert!(green.already_used && green.is_disabled());
        assert!(cyan.selected && !cyan.already_used);
        assert_eq!(menu.len(), 15);
        assert_eq!(menu[0].position, 1);
    }

    #[test]
    fn resolve_accepts_position_code_and_unique_name() {
        assert_eq!(resolve("1").unwrap().code, "#277C78");
        assert_eq!(resolve("#c94736").unwrap().name, "Red");
        assert_eq!(resolve("army green").unwrap().code, "#7F9161");
        assert_eq!(resolve("be6c49").unwrap().name, "Orange");
        assert!(resolve("#123456").is_err());
        assert!(resolve("0").is_err());
        assert!(resolve("16").is_err());
        assert!(resolve("Navy").unwrap_err().contains("ambiguous"));
    }
}
