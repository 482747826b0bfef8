use super::PizzaBuilder;
use crate::model::Pizza;
use pattern_framework::PatternError;
use std::fmt;
use tracing::{info, instrument};

/// The director: knows the order of the steps, not the ingredients.
#[derive(Default)]
pub struct Cook {
    builder: Option<Box<dyn PizzaBuilder>>,
}

impl Cook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: Box<dyn PizzaBuilder>) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Replaces the builder and returns the previous one, along with any pizza it holds.
    pub fn set_pizza_builder(
        &mut self,
        builder: Box<dyn PizzaBuilder>,
    ) -> Option<Box<dyn PizzaBuilder>> {
        self.builder.replace(builder)
    }

    /// Runs bake, base, sauce and topping, in that order, on a fresh pizza.
    #[instrument(skip(self), fields(builder = self.builder_name()))]
    pub fn bake_pizza(&mut self) -> Result<(), PatternError> {
        let builder = self.builder.as_mut().ok_or(PatternError::BuilderUnset)?;
        builder.bake_pizza();
        builder.choose_base()?;
        builder.choose_sauce()?;
        builder.choose_topping()?;
        info!("Pizza baked");
        Ok(())
    }

    pub fn get_pizza(&self) -> Result<&Pizza, PatternError> {
        self.builder
            .as_ref()
            .ok_or(PatternError::BuilderUnset)?
            .get_pizza()
    }

    /// Takes the finished pizza out of the builder.
    pub fn take_pizza(&mut self) -> Result<Pizza, PatternError> {
        self.builder
            .as_mut()
            .ok_or(PatternError::BuilderUnset)?
            .take_pizza()
    }

    fn builder_name(&self) -> &'static str {
        self.builder.as_ref().map_or("none", |b| b.name())
    }
}

impl fmt::Debug for Cook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cook")
            .field("builder", &self.builder_name())
            .finish()
    }
}
