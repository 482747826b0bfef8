use pattern_sample::lifecycle::{Demo, DemoConfig, Showcase};

/// Full run over every demo, in canonical order.
#[test]
fn test_full_showcase_transcript() {
    let config = DemoConfig::from_value(None);
    let lines = Showcase::new(&config)
        .transcript()
        .expect("Showcase failed");

    assert_eq!(
        lines,
        vec![
            "Singleton instance shared: true",
            "QUACK!!!",
            "I am a rum and coke, with an umbrella!, with a lime!",
            "Pizza with deep pan base, bbq sauce, all the meat topping",
            "Pizza with thin crust base, tomato sauce, ground beef and jalapenos topping",
            "drawing Circle",
            "drawing Square",
            "received notification",
        ]
    );
}

#[test]
fn test_selected_demos_only() {
    let config = DemoConfig::from_value(Some("factory, Observer"));
    assert_eq!(config.demos(), &[Demo::Factory, Demo::Observer]);

    let mut seen = Vec::new();
    let count = Showcase::new(&config)
        .run(|line| seen.push(line.to_owned()))
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        seen,
        vec!["drawing Circle", "drawing Square", "received notification"]
    );
}

#[test]
fn test_global_config_is_one_instance() {
    let first = DemoConfig::global().unwrap();
    let second = DemoConfig::global().unwrap();
    assert!(std::ptr::eq(first, second));
}
