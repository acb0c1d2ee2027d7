//! Built-in sample applications.

mod countdown;
mod hello;
mod unstable;

pub use countdown::CountdownApp;
pub use hello::HelloApp;
pub use unstable::UnstableApp;

use samplehost_core::{AppInfo, Application};

/// The samples that can be started with `sample <id>`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apps: Vec<AppInfo>,
}

impl Catalog {
    /// Creates a catalog from `apps`.
    pub fn new(apps: Vec<AppInfo>) -> Self {
        Self { apps }
    }

    /// Looks up a sample by id.
    pub fn find(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppInfo> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Catalog of the built-in samples.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        AppInfo::new("hello", "Hello", || {
            Ok(Box::new(HelloApp::new()) as Box<dyn Application>)
        })
        .with_description("Heartbeat sample with a render context and an overlay")
        .with_tags(["basic"]),
        AppInfo::new("countdown", "Countdown", || {
            Ok(Box::new(CountdownApp::new(CountdownApp::DEFAULT_SECONDS)) as Box<dyn Application>)
        })
        .with_description("Closes itself after a few seconds")
        .with_tags(["basic", "lifecycle"]),
        AppInfo::new("unstable", "Unstable", || {
            Ok(Box::new(UnstableApp::new(UnstableApp::FAILING_UPDATE)) as Box<dyn Application>)
        })
        .with_description("Fails after a couple of frames")
        .with_tags(["lifecycle", "errors"]),
    ])
}
