//! # Customization Options
//!
//! Fixed option value sets and the per-sheet selection record.
//!
//! ## Toggle Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every single-choice slot behaves like a radio group that can be       │
//! │  switched off again:                                                   │
//! │                                                                         │
//! │     unset ──(pick Oat)──► Oat ──(pick Oat)──► unset                    │
//! │                            │                                            │
//! │                       (pick Almond)                                     │
//! │                            ▼                                            │
//! │                          Almond                                         │
//! │                                                                         │
//! │  Cinnamon is a plain on/off flag. Picking the value a slot already     │
//! │  holds clears it, so picking it twice restores the previous record.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::SizeOption;

// =============================================================================
// Field Kinds
// =============================================================================

/// A customization field of the product sheet, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Temperature,
    Size,
    Milk,
    JuiceFlavor,
    Syrup,
    Cinnamon,
    Sugar,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Temperature,
        FieldKind::Size,
        FieldKind::Milk,
        FieldKind::JuiceFlavor,
        FieldKind::Syrup,
        FieldKind::Cinnamon,
        FieldKind::Sugar,
    ];
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Temperature => "temperature",
            FieldKind::Size => "size",
            FieldKind::Milk => "milk",
            FieldKind::JuiceFlavor => "juice flavor",
            FieldKind::Syrup => "syrup",
            FieldKind::Cinnamon => "cinnamon",
            FieldKind::Sugar => "sugar",
        })
    }
}

// =============================================================================
// Value Sets
// =============================================================================

/// Serving temperature for hot/cold beverages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cold,
}

impl Temperature {
    pub const ALL: [Temperature; 2] = [Temperature::Warm, Temperature::Cold];

    pub const fn label(self) -> &'static str {
        match self {
            Temperature::Warm => "Теплый",
            Temperature::Cold => "Холодный",
        }
    }
}

/// Milk type. `Regular` is the plain default and costs nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Milk {
    Regular,
    LactoseFree,
    Oat,
    Almond,
    Coconut,
    Banana,
}

impl Milk {
    pub const ALL: [Milk; 6] = [
        Milk::Regular,
        Milk::LactoseFree,
        Milk::Oat,
        Milk::Almond,
        Milk::Coconut,
        Milk::Banana,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Milk::Regular => "Обычное",
            Milk::LactoseFree => "Безлактозное",
            Milk::Oat => "Овсяное",
            Milk::Almond => "Миндальное",
            Milk::Coconut => "Кокосовое",
            Milk::Banana => "Банановое",
        }
    }

    /// The plain milk a drink comes with anyway.
    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, Milk::Regular)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Syrup {
    Caramel,
    Vanilla,
    Hazelnut,
    Coconut,
    SaltedCaramel,
    Mint,
}

impl Syrup {
    pub const ALL: [Syrup; 6] = [
        Syrup::Caramel,
        Syrup::Vanilla,
        Syrup::Hazelnut,
        Syrup::Coconut,
        Syrup::SaltedCaramel,
        Syrup::Mint,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Syrup::Caramel => "Карамель",
            Syrup::Vanilla => "Ваниль",
            Syrup::Hazelnut => "Лесной орех",
            Syrup::Coconut => "Кокос",
            Syrup::SaltedCaramel => "Солёная карамель",
            Syrup::Mint => "Мята",
        }
    }
}

/// Sugar quantity. Informational only, never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Sugar {
    Grams5,
    Grams10,
    Grams15,
}

impl Sugar {
    pub const ALL: [Sugar; 3] = [Sugar::Grams5, Sugar::Grams10, Sugar::Grams15];

    pub const fn label(self) -> &'static str {
        match self {
            Sugar::Grams5 => "5г",
            Sugar::Grams10 => "10г",
            Sugar::Grams15 => "15г",
        }
    }
}

/// Juice base of a juice-variant drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum JuiceFlavor {
    Orange,
    Cherry,
}

impl JuiceFlavor {
    pub const ALL: [JuiceFlavor; 2] = [JuiceFlavor::Orange, JuiceFlavor::Cherry];

    pub const fn label(self) -> &'static str {
        match self {
            JuiceFlavor::Orange => "Апельсиновый",
            JuiceFlavor::Cherry => "Вишневый",
        }
    }
}

macro_rules! display_by_label {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_by_label!(Temperature, Milk, Syrup, Sugar, JuiceFlavor);

// =============================================================================
// Choice
// =============================================================================

/// A single pick on the product sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Choice {
    Size(SizeOption),
    Temperature(Temperature),
    Milk(Milk),
    Syrup(Syrup),
    Sugar(Sugar),
    Cinnamon,
    JuiceFlavor(JuiceFlavor),
}

impl Choice {
    /// The field this choice belongs to.
    pub const fn field(&self) -> FieldKind {
        match self {
            Choice::Size(_) => FieldKind::Size,
            Choice::Temperature(_) => FieldKind::Temperature,
            Choice::Milk(_) => FieldKind::Milk,
            Choice::Syrup(_) => FieldKind::Syrup,
            Choice::Sugar(_) => FieldKind::Sugar,
            Choice::Cinnamon => FieldKind::Cinnamon,
            Choice::JuiceFlavor(_) => FieldKind::JuiceFlavor,
        }
    }
}

// =============================================================================
// Selected Options
// =============================================================================

/// What the customer has picked so far on the product sheet.
///
/// Value semantics: cloning a record and toggling the clone never affects
/// the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    pub size: Option<SizeOption>,
    pub temperature: Option<Temperature>,
    pub milk: Option<Milk>,
    pub syrup: Option<Syrup>,
    pub sugar: Option<Sugar>,
    pub cinnamon: bool,
    pub juice_flavor: Option<JuiceFlavor>,
}

impl SelectedOptions {
    /// Applies a pick in place: selects the value, or clears the slot when
    /// the same value is already selected.
    pub fn toggle(&mut self, choice: Choice) {
        match choice {
            Choice::Size(size) => toggle_slot(&mut self.size, size),
            Choice::Temperature(t) => toggle_slot(&mut self.temperature, t),
            Choice::Milk(m) => toggle_slot(&mut self.milk, m),
            Choice::Syrup(s) => toggle_slot(&mut self.syrup, s),
            Choice::Sugar(s) => toggle_slot(&mut self.sugar, s),
            Choice::Cinnamon => self.cinnamon = !self.cinnamon,
            Choice::JuiceFlavor(j) => toggle_slot(&mut self.juice_flavor, j),
        }
    }

    /// Value-returning form of [`toggle`](Self::toggle).
    ///
    /// ```rust
    /// use urban_core::options::{Choice, Syrup, SelectedOptions};
    ///
    /// let picked = SelectedOptions::default().toggled(Choice::Syrup(Syrup::Mint));
    /// assert_eq!(picked.syrup, Some(Syrup::Mint));
    /// assert_eq!(picked.toggled(Choice::Syrup(Syrup::Mint)), SelectedOptions::default());
    /// ```
    #[must_use]
    pub fn toggled(mut self, choice: Choice) -> Self {
        self.toggle(choice);
        self
    }

    /// Whether a slot of the given field currently holds a value.
    pub fn is_set(&self, field: FieldKind) -> bool {
        match field {
            FieldKind::Temperature => self.temperature.is_some(),
            FieldKind::Size => self.size.is_some(),
            FieldKind::Milk => self.milk.is_some(),
            FieldKind::JuiceFlavor => self.juice_flavor.is_some(),
            FieldKind::Syrup => self.syrup.is_some(),
            FieldKind::Cinnamon => self.cinnamon,
            FieldKind::Sugar => self.sugar.is_some(),
        }
    }
}

fn toggle_slot<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn every_choice() -> Vec<Choice> {
        let mut choices = vec![
            Choice::Size(SizeOption::new(300, 200)),
            Choice::Size(SizeOption::new(400, 250)),
            Choice::Cinnamon,
        ];
        choices.extend(Temperature::ALL.map(Choice::Temperature));
        choices.extend(Milk::ALL.map(Choice::Milk));
        choices.extend(Syrup::ALL.map(Choice::Syrup));
        choices.extend(Sugar::ALL.map(Choice::Sugar));
        choices.extend(JuiceFlavor::ALL.map(Choice::JuiceFlavor));
        choices
    }

    fn filled() -> SelectedOptions {
        SelectedOptions {
            size: Some(SizeOption::new(300, 200)),
            temperature: Some(Temperature::Cold),
            milk: Some(Milk::Oat),
            syrup: Some(Syrup::Vanilla),
            sugar: Some(Sugar::Grams10),
            cinnamon: true,
            juice_flavor: Some(JuiceFlavor::Cherry),
        }
    }

    fn holds(options: &SelectedOptions, choice: &Choice) -> bool {
        match choice {
            Choice::Size(size) => options.size.as_ref() == Some(size),
            Choice::Temperature(t) => options.temperature == Some(*t),
            Choice::Milk(m) => options.milk == Some(*m),
            Choice::Syrup(s) => options.syrup == Some(*s),
            Choice::Sugar(s) => options.sugar == Some(*s),
            Choice::Cinnamon => options.cinnamon,
            Choice::JuiceFlavor(j) => options.juice_flavor == Some(*j),
        }
    }

    #[test]
    fn test_toggle_twice_restores_record() {
        let mut covered = BTreeSet::new();

        for start in [SelectedOptions::default(), filled()] {
            for choice in every_choice() {
                // Picking another value of an occupied slot replaces it instead.
                if start.is_set(choice.field()) && !holds(&start, &choice) {
                    continue;
                }
                let round_trip = start.clone().toggled(choice.clone()).toggled(choice.clone());
                assert_eq!(round_trip, start, "choice {:?}", choice);
                if start.is_set(choice.field()) {
                    covered.insert(choice.field());
                }
            }
        }

        // Every field was exercised from a start already holding the value.
        assert_eq!(covered, FieldKind::ALL.into_iter().collect::<BTreeSet<_>>());

        for choice in every_choice() {
            let picked = SelectedOptions::default().toggled(choice.clone());
            let round_trip = picked.clone().toggled(choice.clone()).toggled(choice.clone());
            assert_eq!(round_trip, picked, "choice {:?}", choice);
        }
    }

    #[test]
    fn test_toggling_selected_value_clears_slot() {
        for choice in every_choice() {
            let picked = SelectedOptions::default().toggled(choice.clone());
            assert!(holds(&picked, &choice), "choice {:?}", choice);

            let cleared = picked.toggled(choice.clone());
            assert!(!cleared.is_set(choice.field()), "choice {:?}", choice);
            assert_eq!(cleared, SelectedOptions::default());
        }

        let start = filled();
        for choice in every_choice().into_iter().filter(|c| holds(&start, c)) {
            let cleared = start.clone().toggled(choice.clone());
            assert!(!cleared.is_set(choice.field()), "choice {:?}", choice);
            for other in FieldKind::ALL.into_iter().filter(|f| *f != choice.field()) {
                assert!(cleared.is_set(other), "{} lost after clearing {}", other, choice.field());
            }
        }
    }

    #[test]
    fn test_other_value_replaces_then_clears() {
        let options = filled().toggled(Choice::Size(SizeOption::new(400, 250)));
        assert_eq!(options.size, Some(SizeOption::new(400, 250)));

        let options = options.toggled(Choice::Size(SizeOption::new(400, 250)));
        assert_eq!(options.size, None);

        let options = filled()
            .toggled(Choice::Milk(Milk::Almond))
            .toggled(Choice::Milk(Milk::Almond));
        assert_eq!(options.milk, None);
        assert_eq!(options.syrup, Some(Syrup::Vanilla));
    }

    #[test]
    fn test_single_choice_replaces_previous_value() {
        let options = SelectedOptions::default()
            .toggled(Choice::Milk(Milk::Oat))
            .toggled(Choice::Milk(Milk::Almond));
        assert_eq!(options.milk, Some(Milk::Almond));

        let options = options.toggled(Choice::Size(SizeOption::new(300, 200)));
        let options = options.toggled(Choice::Size(SizeOption::new(400, 250)));
        assert_eq!(options.size, Some(SizeOption::new(400, 250)));
    }

    #[test]
    fn test_slots_are_independent() {
        let options = SelectedOptions::default()
            .toggled(Choice::Syrup(Syrup::Caramel))
            .toggled(Choice::Cinnamon)
            .toggled(Choice::Sugar(Sugar::Grams5));

        assert_eq!(options.syrup, Some(Syrup::Caramel));
        assert!(options.cinnamon);
        assert_eq!(options.sugar, Some(Sugar::Grams5));
        assert!(options.milk.is_none());
        assert!(options.is_set(FieldKind::Cinnamon));
        assert!(!options.is_set(FieldKind::Temperature));
    }

    #[test]
    fn test_choice_field() {
        assert_eq!(Choice::Cinnamon.field(), FieldKind::Cinnamon);
        assert_eq!(Choice::JuiceFlavor(JuiceFlavor::Orange).field(), FieldKind::JuiceFlavor);
        assert_eq!(Choice::Size(SizeOption::new(200, 150)).field(), FieldKind::Size);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Milk::Coconut.to_string(), "Кокосовое");
        assert!(Milk::Regular.is_default());
        assert!(!Milk::Oat.is_default());
        assert_eq!(Temperature::Warm.to_string(), "Теплый");
        assert_eq!(Sugar::Grams15.to_string(), "15г");
        assert_eq!(JuiceFlavor::Cherry.to_string(), "Вишневый");
    }

    #[test]
    fn test_choice_wire_shape() {
        let json = serde_json::to_value(Choice::Milk(Milk::Oat)).unwrap();
        assert_eq!(json, serde_json::json!({"field": "milk", "value": "oat"}));

        let cinnamon: Choice = serde_json::from_str(r#"{"field": "cinnamon"}"#).unwrap();
        assert_eq!(cinnamon, Choice::Cinnamon);
    }
}
