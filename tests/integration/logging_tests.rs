use std::io;
use std::sync::{Arc, Mutex};

use whattoeat::{
    AccessKey, Catalog, ImageConfig, MealController, Model, Preference, UnsplashClient,
};

const KEY: &str = "sk-live-0123456789";

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn capture_logs<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn given_meal_selected_with_unsplash_client_should_log_query_but_not_key() {
    let config = ImageConfig::new(whattoeat::DEFAULT_ENDPOINT, AccessKey::new(KEY)).unwrap();
    let controller = MealController::new(Catalog::builtin(), UnsplashClient::new(config));

    let logs = capture_logs(|| {
        let model = Model::with_preference(Preference::Vegan);
        let (model, _effect) = controller.select_meal_time(&model, "lunch");
        let _ = controller.select_meal_time(&model, "brunch");
    });

    assert!(logs.contains("vegan salad lunch"), "{logs}");
    assert!(logs.contains("invalid selection"), "{logs}");
    assert!(!logs.contains(KEY), "{logs}");
}

#[test]
fn given_request_url_should_carry_key_without_logging_it() {
    let config = ImageConfig::new(whattoeat::DEFAULT_ENDPOINT, AccessKey::new(KEY)).unwrap();
    let client = UnsplashClient::new(config);

    let mut url = None;
    let logs = capture_logs(|| url = Some(client.request_url("steak dinner")));

    assert!(url.unwrap().as_str().contains(KEY));
    assert!(!logs.contains(KEY), "{logs}");
}
