use pattern_sample::lifecycle::{DemoConfig, Showcase};
use pattern_sample::shapes::ShapeFactory;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Shape teardown and the factory fallback both leave a trace in the log.
#[test]
fn test_factory_logs_teardown_and_fallback() {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = DemoConfig::from_value(Some("factory"));
        let lines = Showcase::new(&config).transcript().unwrap();
        assert_eq!(lines, vec!["drawing Circle", "drawing Square"]);

        let fallback = ShapeFactory.get_shape_raw(99);
        assert_eq!(fallback.name(), "Circle");
    });

    let log = buffer.contents();
    let circle = log.find("Circle destructor called").expect("no Circle teardown");
    let square = log.find("Square destructor called").expect("no Square teardown");
    assert!(circle < square, "circle must be torn down first:\n{log}");
    assert_eq!(log.matches("Circle destructor called").count(), 2);

    let warning = log
        .lines()
        .find(|line| line.contains("Unknown discriminant, using fallback"))
        .expect("no fallback warning");
    assert!(warning.contains("WARN"), "{warning}");
    assert!(warning.contains("raw=99"), "{warning}");
}
