//! Concrete pizza builders. Each one always makes the same pizza.

use super::PizzaBuilder;
use crate::model::Pizza;
use pattern_framework::{PatternError, Workbench};

/// Deep pan, bbq, all the meat.
#[derive(Debug, Default)]
pub struct MeatFeastBuilder {
    bench: Workbench<Pizza>,
}

impl MeatFeastBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for MeatFeastBuilder {
    fn name(&self) -> &'static str {
        "meat_feast"
    }

    fn workbench(&self) -> &Workbench<Pizza> {
        &self.bench
    }

    fn workbench_mut(&mut self) -> &mut Workbench<Pizza> {
        &mut self.bench
    }

    fn choose_base(&mut self) -> Result<(), PatternError> {
        self.bench.current_mut("choose_base")?.set_base("deep pan");
        Ok(())
    }

    fn choose_sauce(&mut self) -> Result<(), PatternError> {
        self.bench.current_mut("choose_sauce")?.set_sauce("bbq");
        Ok(())
    }

    fn choose_topping(&mut self) -> Result<(), PatternError> {
        self.bench
            .current_mut("choose_topping")?
            .set_topping("all the meat");
        Ok(())
    }
}

/// Thin crust, tomato, ground beef and jalapenos.
#[derive(Debug, Default)]
pub struct SpicyPizzaBuilder {
    bench: Workbench<Pizza>,
}

impl SpicyPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for SpicyPizzaBuilder {
    fn name(&self) -> &'static str {
        "spicy"
    }

    fn workbench(&self) -> &Workbench<Pizza> {
        &self.bench
    }

    fn workbench_mut(&mut self) -> &mut Workbench<Pizza> {
        &mut self.bench
    }

    fn choose_base(&mut self) -> Result<(), PatternError> {
        self.bench.current_mut("choose_base")?.set_base("thin crust");
        Ok(())
    }

    fn choose_sauce(&mut self) -> Result<(), PatternError> {
        self.bench.current_mut("choose_sauce")?.set_sauce("tomato");
        Ok(())
    }

    fn choose_topping(&mut self) -> Result<(), PatternError> {
        self.bench
            .current_mut("choose_topping")?
            .set_topping("ground beef and jalapenos");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_before_bake_fails() {
        let mut builder = SpicyPizzaBuilder::new();
        assert_eq!(
            builder.choose_sauce(),
            Err(PatternError::NotStarted { step: "choose_sauce" })
        );
        assert!(builder.get_pizza().is_err());
    }

    #[test]
    fn test_steps_fill_one_field_each() {
        let mut builder = MeatFeastBuilder::new();
        builder.bake_pizza();
        assert_eq!(builder.get_pizza().unwrap(), &Pizza::default());

        builder.choose_sauce().unwrap();
        let pizza = builder.get_pizza().unwrap();
        assert_eq!(pizza.sauce(), "bbq");
        assert_eq!(pizza.base(), "");
        assert_eq!(pizza.topping(), "");
    }

    #[test]
    fn test_take_leaves_builder_unbaked() {
        let mut builder = MeatFeastBuilder::new();
        builder.bake_pizza();
        builder.choose_base().unwrap();
        let pizza = builder.take_pizza().unwrap();
        assert_eq!(pizza.base(), "deep pan");
        assert!(builder.choose_base().is_err());
    }
}
