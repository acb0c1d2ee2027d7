//! # samplehost platform
//!
//! Owns the plugins, the window and the active application, and drives them:
//!
//! - **Dispatch**: hands the command line to the plugins that claimed its
//!   tokens, then creates the window
//! - **Run-loop**: starts requested applications, updates the active one
//!   every frame, fires lifecycle hooks and recovers from application
//!   failures by falling forward to the next requested application
//! - **Teardown**: prints usage or guidance and releases everything
//!
//! ## Example
//!
//! ```rust,no_run
//! use samplehost_platform::{Platform, create_window};
//!
//! let arguments: Vec<String> = std::env::args().skip(1).collect();
//! let mut platform = Platform::new(arguments, Box::new(create_window));
//!
//! let mut code = platform.initialize(Vec::new());
//! if code.is_success() {
//!     code = platform.main_loop();
//! }
//! platform.terminate(code);
//! std::process::exit(code.process_status());
//! ```

mod dispatch;
pub mod platform;
pub mod state;
pub mod timer;
pub mod window;

pub use platform::{Platform, RunState, WARM_START_DELTA};
pub use state::PlatformState;
pub use timer::Timer;
pub use window::{HeadlessWindow, TerminalWindow, create_window};
