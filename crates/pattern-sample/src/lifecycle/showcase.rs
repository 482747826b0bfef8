use super::config::{Demo, DemoConfig};
use super::error::DemoError;
use crate::bar::{house_special, Beverage};
use crate::database::{Database, Listener};
use crate::duck::{Duck, LouderQuack};
use crate::kitchen::{Cook, MeatFeastBuilder, SpicyPizzaBuilder};
use crate::model::ShapeKind;
use crate::shapes::ShapeFactory;
use pattern_framework::{Observee, Observer};
use std::rc::Rc;
use tracing::{info, info_span};

/// Runs the selected demos one after another.
///
/// Demos are independent: nothing produced by one is handed to the next. Each demo
/// writes its human-readable lines through the `emit` callback as it goes, so teardown
/// logs from factory products interleave with the lines that caused them.
///
/// # Example
///
/// ```rust
/// use pattern_sample::lifecycle::{DemoConfig, Showcase};
///
/// let config = DemoConfig::from_value(Some("strategy,decorator"));
/// let lines = Showcase::new(&config).transcript().unwrap();
/// assert_eq!(lines, vec![
///     "QUACK!!!".to_string(),
///     "I am a rum and coke, with an umbrella!, with a lime!".to_string(),
/// ]);
/// ```
#[derive(Debug)]
pub struct Showcase<'a> {
    config: &'a DemoConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(config: &'a DemoConfig) -> Self {
        Self { config }
    }

    /// Runs every selected demo, returning the number of lines emitted.
    pub fn run(&self, mut emit: impl FnMut(&str)) -> Result<usize, DemoError> {
        let mut lines = 0;
        let mut counted = |line: &str| {
            lines += 1;
            emit(line);
        };

        for &demo in self.config.demos() {
            let _span = info_span!("demo", name = demo.name()).entered();
            info!("Running demo");
            match demo {
                Demo::Singleton => singleton(&mut counted)?,
                Demo::Strategy => strategy(&mut counted)?,
                Demo::Decorator => decorator(&mut counted)?,
                Demo::Builder => builder(&mut counted)?,
                Demo::Factory => factory(&mut counted),
                Demo::Observer => observer(&mut counted),
            }
        }
        Ok(lines)
    }

    /// Runs every selected demo and collects the emitted lines.
    pub fn transcript(&self) -> Result<Vec<String>, DemoError> {
        let mut lines = Vec::new();
        self.run(|line| lines.push(line.to_string()))?;
        Ok(lines)
    }
}

fn singleton(emit: &mut dyn FnMut(&str)) -> Result<(), DemoError> {
    let first = DemoConfig::global()?;
    let second = DemoConfig::global()?;
    emit(&format!(
        "Singleton instance shared: {}",
        std::ptr::eq(first, second)
    ));
    Ok(())
}

fn strategy(emit: &mut dyn FnMut(&str)) -> Result<(), DemoError> {
    let mut duck = Duck::new();
    duck.set_quack(Box::new(LouderQuack));
    emit(&duck.quack()?);
    Ok(())
}

fn decorator(emit: &mut dyn FnMut(&str)) -> Result<(), DemoError> {
    let drink = house_special();
    emit(&drink.describe());
    Ok(())
}

fn builder(emit: &mut dyn FnMut(&str)) -> Result<(), DemoError> {
    let mut cook = Cook::with_builder(Box::new(MeatFeastBuilder::new()));
    cook.bake_pizza()?;
    let meat_feast = cook.take_pizza()?;
    emit(&meat_feast.describe());

    cook.set_pizza_builder(Box::new(SpicyPizzaBuilder::new()));
    cook.bake_pizza()?;
    emit(&cook.get_pizza()?.describe());
    Ok(())
}

fn factory(emit: &mut dyn FnMut(&str)) {
    let shape_factory = ShapeFactory;
    let circle = shape_factory.get_shape(ShapeKind::Circle);
    emit(&circle.draw());

    let square = shape_factory.get_shape(ShapeKind::Square);
    emit(&square.draw());

    drop(circle);
    drop(square);
}

fn observer(emit: &mut dyn FnMut(&str)) {
    let db = Database::new();
    let listener = Rc::new(Listener::new());
    let handle: Rc<dyn Observer> = listener.clone();

    db.register_listener(&handle);
    db.update();
    // Registered observers are `'static`, so they cannot hold the borrowed `emit` sink.
    // The listener logs each notification as it arrives; the transcript replays its count.
    for _ in 0..listener.received() {
        emit(Listener::MESSAGE);
    }
}
