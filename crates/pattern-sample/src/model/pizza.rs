use std::fmt;

/// A pizza assembled step by step by a [`PizzaBuilder`](crate::kitchen::PizzaBuilder).
///
/// Starts empty; each construction step fills in one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pizza {
    base: String,
    sauce: String,
    topping: String,
}

impl Pizza {
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = base.into();
    }

    pub fn set_sauce(&mut self, sauce: impl Into<String>) {
        self.sauce = sauce.into();
    }

    pub fn set_topping(&mut self, topping: impl Into<String>) {
        self.topping = topping.into();
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn topping(&self) -> &str {
        &self.topping
    }

    /// `Pizza with {base} base, {sauce} sauce, {topping} topping`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza with {} base, {} sauce, {} topping",
            self.base, self.sauce, self.topping
        )
    }
}
