use std::collections::{BTreeMap, HashSet};

use uuid::Uuid;

use crate::core::errors::DashboardError;
use crate::domain::{palette, ColorEntry, Pot, PotInput, NAME_MAX_CHARS};

use super::{
    fields, messages, parse_number, FieldDescriptor, FormDescriptor, FormErrors, FormFlow,
    FormState, Rule,
};

/// Create/edit form for a pot: name, target and theme colour.
#[derive(Clone)]
pub struct PotForm {
    state: FormState,
    editing: Option<Uuid>,
}

impl PotForm {
    /// Blank form for a new pot. `pots` are the existing pots whose themes
    /// are off-limits.
    pub fn for_create<'a>(pots: impl IntoIterator<Item = &'a Pot>) -> Self {
        let descriptor = descriptor(used_themes(pots, None));
        Self {
            state: FormState::new(descriptor, BTreeMap::new()),
            editing: None,
        }
    }

    /// Form pre-filled from `pot`; its own theme stays selectable.
    pub fn for_edit<'a>(pot: &Pot, pots: impl IntoIterator<Item = &'a Pot>) -> Self {
        let descriptor = descriptor(used_themes(pots, Some(pot.id)));
        let mut defaults = BTreeMap::new();
        defaults.insert(fields::NAME.to_string(), pot.name.clone());
        defaults.insert(fields::TARGET.to_string(), format_target(pot.target));
        defaults.insert(fields::COLOR.to_string(), pot.theme.clone());
        Self {
            state: FormState::new(descriptor, defaults),
            editing: Some(pot.id),
        }
    }

    /// Id of the pot being edited, `None` when creating.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Remaining characters shown under the name input.
    pub fn characters_left(&self) -> usize {
        NAME_MAX_CHARS.saturating_sub(self.state.value(fields::NAME).trim().chars().count())
    }

    /// Currently chosen colour, or the placeholder when none is chosen.
    pub fn selected_color(&self) -> &'static ColorEntry {
        palette::selectable_entry(self.state.value(fields::COLOR)).unwrap_or(palette::placeholder())
    }

    pub fn select_color(&mut self, entry: &ColorEntry) -> Result<(), DashboardError> {
        self.state.set_field(fields::COLOR, entry.code)
    }
}

fn format_target(target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{target:.0}")
    } else {
        format!("{target:.2}")
    }
}

fn used_themes<'a>(pots: impl IntoIterator<Item = &'a Pot>, excluding: Option<Uuid>) -> HashSet<String> {
    pots.into_iter()
        .filter(|pot| excluding != Some(pot.id))
        .map(|pot| pot.theme.trim().to_ascii_uppercase())
        .collect()
}

fn descriptor(used: HashSet<String>) -> FormDescriptor {
    FormDescriptor::new(
        "pot",
        vec![
            FieldDescriptor::new(fields::NAME, "Pot Name")
                .rule(Rule::Required(messages::NAME_REQUIRED))
                .rule(Rule::MaxChars(NAME_MAX_CHARS, messages::NAME_TOO_LONG)),
            FieldDescriptor::new(fields::TARGET, "Target")
                .rule(Rule::Required(messages::TARGET_REQUIRED))
                .rule(Rule::Number(messages::NOT_A_NUMBER))
                .rule(Rule::Positive(messages::MORE_THAN_ZERO)),
            FieldDescriptor::new(fields::COLOR, "Theme")
                .rule(Rule::Required(messages::COLOR_REQUIRED))
                .rule(Rule::custom(move |raw| {
                    // Unknown codes and colours held by other pots both count as unset.
                    match palette::selectable_entry(raw) {
                        Some(entry) if !used.contains(&entry.code.to_ascii_uppercase()) => Ok(()),
                        _ => Err(messages::COLOR_REQUIRED.to_string()),
                    }
                })),
        ],
    )
}

impl FormFlow for PotForm {
    type Output = PotInput;

    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<PotInput, FormErrors> {
        let get = |key: &str| values.get(key).map(String::as_str).unwrap_or("");
        let mut errors = FormErrors::new();
        let target = parse_number(get(fields::TARGET));
        let theme = palette::selectable_entry(get(fields::COLOR));
        if target.is_none() {
            errors.insert(fields::TARGET, messages::NOT_A_NUMBER);
        }
        if theme.is_none() {
            errors.insert(fields::COLOR, messages::COLOR_REQUIRED);
        }
        match (target, theme) {
            (Some(target), Some(theme)) => Ok(PotInput::new(
                get(fields::NAME).trim(),
                target,
                theme.code,
            )),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pots() -> Vec<Pot> {
        let mut savings = Pot::new(PotInput::new("Savings", 2000.0, "#277C78"));
        savings.total = 159.0;
        vec![savings, Pot::new(PotInput::new("Gift", 60.0, "#82C9D7"))]
    }

    fn fill(form: &mut PotForm, name: &str, target: &str, color: &str) {
        form.set_field(fields::NAME, name).unwrap();
        form.set_field(fields::TARGET, target).unwrap();
        form.set_field(fields::COLOR, color).unwrap();
    }

    #[test]
    fn create_accepts_valid_input() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        fill(&mut form, "  Wedding ", "2500", "#c94736");
        let input = form.submit().expect("valid form");
        assert_eq!(input, PotInput::new("Wedding", 2500.0, "#C94736"));
        assert!(form.state().is_pristine());
    }

    #[test]
    fn create_rejects_long_name() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        fill(&mut form, &"x".repeat(31), "10", "#C94736");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(fields::NAME), Some(messages::NAME_TOO_LONG));
        assert_eq!(form.characters_left(), 0);
    }

    #[test]
    fn create_rejects_used_color() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        fill(&mut form, "Another", "10", "#277C78");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(fields::COLOR), Some(messages::COLOR_REQUIRED));
    }

    #[test]
    fn placeholder_and_unknown_colors_count_as_missing() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        fill(&mut form, "Another", "10", "#000");
        assert_eq!(
            form.state().errors().get(fields::COLOR),
            Some(messages::COLOR_REQUIRED)
        );
        form.set_field(fields::COLOR, "#ABCDEF").unwrap();
        assert_eq!(
            form.state().errors().get(fields::COLOR),
            Some(messages::COLOR_REQUIRED)
        );
        assert!(form.selected_color().is_placeholder());
    }

    #[test]
    fn target_must_be_positive_number() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        form.set_field(fields::TARGET, "").unwrap();
        assert_eq!(
            form.state().visible_error(fields::TARGET),
            Some(messages::TARGET_REQUIRED)
        );
        form.set_field(fields::TARGET, "abc").unwrap();
        assert_eq!(
            form.state().visible_error(fields::TARGET),
            Some(messages::NOT_A_NUMBER)
        );
        form.set_field(fields::TARGET, "-5").unwrap();
        assert_eq!(
            form.state().visible_error(fields::TARGET),
            Some(messages::MORE_THAN_ZERO)
        );
    }

    #[test]
    fn edit_prefills_and_allows_own_color() {
        let pots = pots();
        let mut form = PotForm::for_edit(&pots[0], &pots);
        assert_eq!(form.editing(), Some(pots[0].id));
        assert_eq!(form.state().value(fields::NAME), "Savings");
        assert_eq!(form.state().value(fields::TARGET), "2000");
        assert_eq!(form.selected_color().name, "Green");
        assert_eq!(form.characters_left(), 23);

        let input = form.submit().expect("own colour stays valid");
        assert_eq!(input.theme, "#277C78");
    }

    #[test]
    fn select_color_sets_and_touches_the_field() {
        let pots = pots();
        let mut form = PotForm::for_create(&pots);
        form.select_color(palette::lookup("#C94736").unwrap())
            .expect("colour field exists");
        assert_eq!(form.state().value(fields::COLOR), "#C94736");
        assert!(form.state().is_touched(fields::COLOR));
        assert_eq!(form.state().visible_error(fields::COLOR), None);
    }

    #[test]
    fn edit_still_rejects_other_pots_color() {
        let pots = pots();
        let mut form = PotForm::for_edit(&pots[0], &pots);
        form.select_color(palette::lookup("#82C9D7").unwrap()).unwrap();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(fields::COLOR), Some(messages::COLOR_REQUIRED));
    }
}
