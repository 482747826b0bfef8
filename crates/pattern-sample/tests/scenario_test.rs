use pattern_framework::{
    Component, Decorate, Decorator, Discriminant, Observee, Observer, PatternError,
};
use pattern_sample::bar::{Lime, RumAndCoke, Umbrella};
use pattern_sample::database::{Database, Listener};
use pattern_sample::kitchen::{Cook, MeatFeastBuilder, PizzaBuilder, SpicyPizzaBuilder};
use pattern_sample::model::ShapeKind;
use pattern_sample::shapes::ShapeFactory;
use std::cell::RefCell;
use std::rc::Rc;

// --- Decorator ---

/// Wrapping order is suffix order, innermost first.
#[test]
fn test_decorator_chain_appends_suffixes_in_wrap_order() {
    let leaf = RumAndCoke.describe();
    let mut drink: Box<dyn Component> = Box::new(RumAndCoke);
    let mut expected = leaf.clone();

    for (i, lime) in [true, false, false, true, true].into_iter().enumerate() {
        if lime {
            drink = Box::new(Decorator::<Lime>::wrap(drink));
            expected.push_str(", with a lime!");
        } else {
            drink = Box::new(Decorator::<Umbrella>::wrap(drink));
            expected.push_str(", with an umbrella!");
        }
        assert_eq!(drink.describe(), expected);
        assert_eq!(drink.layers(), i + 2);
    }
}

#[test]
fn test_scenario_umbrella_then_lime() {
    let drink = RumAndCoke.decorate::<Umbrella>().decorate::<Lime>();
    assert_eq!(
        drink.describe(),
        "I am a rum and coke, with an umbrella!, with a lime!"
    );
}

// --- Builder ---

#[test]
fn test_scenario_meat_feast() {
    let mut cook = Cook::with_builder(Box::new(MeatFeastBuilder::new()));
    cook.bake_pizza().unwrap();
    let pizza = cook.get_pizza().unwrap();
    assert_eq!(
        (pizza.base(), pizza.sauce(), pizza.topping()),
        ("deep pan", "bbq", "all the meat")
    );
}

#[test]
fn test_scenario_spicy() {
    let mut cook = Cook::with_builder(Box::new(SpicyPizzaBuilder::new()));
    cook.bake_pizza().unwrap();
    let pizza = cook.get_pizza().unwrap();
    assert_eq!(
        (pizza.base(), pizza.sauce(), pizza.topping()),
        ("thin crust", "tomato", "ground beef and jalapenos")
    );
    assert_eq!(
        pizza.describe(),
        "Pizza with thin crust base, tomato sauce, ground beef and jalapenos topping"
    );
}

/// Baking again always starts from an empty pizza.
#[test]
fn test_repeated_bakes_produce_fresh_identical_pizzas() {
    let mut cook = Cook::with_builder(Box::new(MeatFeastBuilder::new()));
    let mut pizzas = Vec::new();
    for _ in 0..3 {
        cook.bake_pizza().unwrap();
        pizzas.push(cook.take_pizza().unwrap());
    }
    assert!(pizzas.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        cook.get_pizza().unwrap_err(),
        PatternError::NotStarted { step: "get" }
    );
}

/// A builder that has been used directly still yields a clean pizza from the cook.
#[test]
fn test_cook_discards_partial_product() {
    let mut builder = SpicyPizzaBuilder::new();
    builder.bake_pizza();
    builder.choose_topping().unwrap();

    let mut cook = Cook::with_builder(Box::new(builder));
    cook.bake_pizza().unwrap();
    assert_eq!(cook.get_pizza().unwrap().base(), "thin crust");
}

// --- Factory ---

#[test]
fn test_scenario_square() {
    let square = ShapeFactory.get_shape(ShapeKind::Square);
    assert_eq!(square.name(), "Square");
    assert_eq!(square.draw(), "drawing Square");
}

/// Unknown discriminators fall back to the first declared kind instead of failing.
#[test]
fn test_out_of_range_discriminator_yields_default_shape() {
    for raw in [2, 3, -1, 1000, i32::MIN, i32::MAX] {
        assert_eq!(ShapeKind::from_raw(raw), ShapeKind::Circle);
        assert_eq!(ShapeFactory.get_shape_raw(raw).name(), "Circle");
        assert_eq!(
            ShapeKind::try_from_raw(raw),
            Err(PatternError::UnknownDiscriminant(raw))
        );
    }
    for &kind in ShapeKind::VARIANTS {
        assert_eq!(ShapeFactory.get_shape_raw(kind.raw()).name(), kind.label());
    }
}

// --- Observer ---

#[test]
fn test_scenario_single_listener() {
    let db = Database::new();
    let listener = Rc::new(Listener::new());
    let handle: Rc<dyn Observer> = listener.clone();

    db.register_listener(&handle);
    let before = listener.received();
    db.update();
    assert_eq!(listener.received() - before, 1);
}

struct Named {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Observer for Named {
    fn update(&self) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Duplicates are notified once per registration; unregister removes every occurrence.
#[test]
fn test_register_unregister_sequence() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let named = |name| -> Rc<dyn Observer> {
        Rc::new(Named {
            name,
            log: log.clone(),
        })
    };
    let a = named("a");
    let b = named("b");
    let c = named("c");

    let db = Database::new();
    db.register_listener(&a);
    db.register_listener(&b);
    db.register_listener(&a);
    db.register_listener(&c);
    db.unregister_listener(&b);
    db.register_listener(&b);

    assert_eq!(db.update(), 4);
    assert_eq!(*log.borrow(), vec!["a", "a", "c", "b"]);

    log.borrow_mut().clear();
    db.unregister_listener(&a);
    db.unregister_listener(&a);
    assert_eq!(db.update(), 2);
    assert_eq!(*log.borrow(), vec!["c", "b"]);
}
