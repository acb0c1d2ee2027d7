//! The platform: argument dispatch, the application run-loop and teardown.

use std::fmt;

use samplehost_core::{
    AppInfo, Application, ApplicationContext, Drawer, ExitCode, Extent, HostError, InputEvent,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, OptionalWindowProperties, Result, Window, WindowEvent,
    WindowFactory, WindowMode,
};
use samplehost_plugins::{HookDispatcher, Host, Plugin, PluginRegistry};
use tracing_appender::non_blocking::WorkerGuard;

use crate::state::PlatformState;
use crate::timer::Timer;

/// Delta used for the update that follows an application start, before real
/// frame timing begins.
pub const WARM_START_DELTA: f32 = 0.01667;

/// Lifecycle state of the platform, derived from what it currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No application active or requested.
    Idle,
    /// An application is requested but not created yet.
    Starting,
    /// An application is active.
    Running,
    /// A close was requested or the window wants to close.
    Closing,
    /// `terminate` has run.
    Terminated,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Starting => write!(f, "starting"),
            Self::Running => write!(f, "running"),
            Self::Closing => write!(f, "closing"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

/// Hosts plugins and runs one application at a time.
///
/// Typical use:
///
/// 1. [`Platform::initialize`] dispatches the command line to plugins and
///    creates the window
/// 2. [`Platform::main_loop`] runs frames until one does not succeed
/// 3. [`Platform::terminate`] prints usage or guidance and tears down
pub struct Platform {
    pub(crate) arguments: Vec<String>,
    pub(crate) plugins: Vec<Box<dyn Plugin>>,
    pub(crate) registry: PluginRegistry,
    pub(crate) state: PlatformState,
    window_factory: Box<dyn WindowFactory>,
    active_app: Option<Box<dyn Application>>,
    /// Id of the most recently started or attempted application.
    app_id: Option<String>,
    timer: Timer,
    last_error: Option<String>,
    log_guard: Option<WorkerGuard>,
    terminated: bool,
}

impl Platform {
    /// Creates a platform for `arguments` (without the program name).
    pub fn new(arguments: Vec<String>, window_factory: Box<dyn WindowFactory>) -> Self {
        Self {
            arguments,
            plugins: Vec::new(),
            registry: PluginRegistry::new(),
            state: PlatformState::default(),
            window_factory,
            active_app: None,
            app_id: None,
            timer: Timer::new(),
            last_error: None,
            log_guard: None,
            terminated: false,
        }
    }

    /// Seeds the window properties plugins start from.
    pub fn with_window_properties(mut self, properties: &OptionalWindowProperties) -> Self {
        self.state.set_window_properties(properties);
        self
    }

    /// Hands over the guard of a non-blocking log writer; it is dropped, and
    /// the writer flushed, during [`Platform::terminate`].
    pub fn set_log_guard(&mut self, guard: WorkerGuard) {
        self.log_guard = Some(guard);
    }

    /// Loads `plugins` and dispatches the command line to them.
    ///
    /// Returns `Success` when an application was requested and the window
    /// was created; any other code should be passed straight to
    /// [`Platform::terminate`].
    pub fn initialize(&mut self, plugins: Vec<Box<dyn Plugin>>) -> ExitCode {
        self.plugins = plugins;
        tracing::info!("Platform initialized with {} plugins", self.plugins.len());

        if self.arguments.is_empty() {
            return ExitCode::NoSample;
        }
        if self
            .arguments
            .iter()
            .any(|arg| arg == "-h" || arg == "--help")
        {
            return ExitCode::Help;
        }

        self.registry = PluginRegistry::from_plugins(&self.plugins);

        let code = self.dispatch_arguments();
        if !code.is_success() {
            return code;
        }

        // Closed by a plugin while parsing.
        if self.state.close_requested {
            return ExitCode::Close;
        }

        if !self.state.app_requested() {
            return ExitCode::NoSample;
        }

        match self.window_factory.create(&self.state.window_properties) {
            Ok(window) => {
                tracing::debug!("Window created ({})", window.extent());
                self.state.window = Some(window);
                ExitCode::Success
            }
            Err(e) => {
                tracing::error!("Window creation failed: {}", e);
                self.last_error = Some(e.to_string());
                ExitCode::FatalError
            }
        }
    }

    /// Runs frames until one returns something other than `Success`.
    pub fn main_loop(&mut self) -> ExitCode {
        let mut code = ExitCode::Success;
        while code.is_success() {
            code = self.main_loop_frame();
        }
        code
    }

    /// Runs a single frame.
    ///
    /// A failure inside the frame is reported to the app-error hook. The loop
    /// may continue if that left another application requested; otherwise
    /// the failure is retained and the frame returns `FatalError`.
    pub fn main_loop_frame(&mut self) -> ExitCode {
        match self.run_frame() {
            Ok(code) => code,
            Err(e) => self.recover(e),
        }
    }

    fn run_frame(&mut self) -> Result<ExitCode> {
        if self.state.app_requested() {
            self.start_app()?;
        }

        if self.active_app.is_none() {
            return Ok(ExitCode::NoSample);
        }

        self.update()?;

        if self.active_app.as_ref().is_some_and(|app| app.should_close()) {
            self.close_app()?;
        }

        let events = match self.state.window.as_mut() {
            Some(window) => window.process_events()?,
            None => Vec::new(),
        };
        for event in events {
            self.handle_window_event(event)?;
        }

        let window_closing = self
            .state
            .window
            .as_ref()
            .is_some_and(|window| window.should_close());
        if window_closing || self.state.close_requested {
            return Ok(ExitCode::Close);
        }

        Ok(ExitCode::Success)
    }

    fn recover(&mut self, error: HostError) -> ExitCode {
        let app_id = self.app_id.clone().unwrap_or_default();
        tracing::error!("Error message: {}", error);
        tracing::error!("Failed when running application {}", app_id);

        if let Err(e) = self.dispatcher().on_app_error(&app_id) {
            tracing::error!("App error hook failed: {}", e);
        }

        match self.state.requested_app() {
            Some(next) => {
                tracing::info!("Attempting to load next application {}", next.id);
                ExitCode::Success
            }
            None => {
                self.last_error = Some(error.to_string());
                ExitCode::FatalError
            }
        }
    }

    /// Replaces the active application with the requested one.
    fn start_app(&mut self) -> Result<()> {
        // Taken before anything can fail so a broken app is not retried.
        let Some(info) = self.state.requested_app.take() else {
            return Ok(());
        };

        if let Some(mut previous) = self.active_app.take() {
            let runtime = self.timer.stop();
            tracing::info!(
                "Closing app {} (runtime: {:.1}s)",
                previous.name(),
                runtime.as_secs_f32()
            );
            previous.finish();
        }

        tracing::info!("Starting app {}", info.id);
        self.app_id = Some(info.id.clone());

        let mut app = info.create()?;
        app.set_name(info.name.clone());

        let context = ApplicationContext {
            headless: self.state.window_properties.mode == WindowMode::Headless,
            window: self.state.window.as_deref(),
        };
        if let Err(e) = app.prepare(&context) {
            tracing::error!("Failed to prepare app {}", info.id);
            app.finish();
            return Err(e);
        }
        self.active_app = Some(app);

        self.dispatcher().on_app_start(&info.id)?;

        self.timer.start();
        if let Some(app) = self.active_app.as_mut() {
            app.update(WARM_START_DELTA)?;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let mut delta_time = self.timer.tick().as_secs_f32();

        if !(self.state.focused || self.state.always_render) {
            return Ok(());
        }

        self.dispatcher().on_update(delta_time)?;

        if let Some(step) = self.state.simulation_frame_time {
            delta_time = step;
        }

        let Some(app) = self.active_app.as_mut() else {
            return Ok(());
        };
        let hooks = self.registry.hooks();
        let plugins = &mut self.plugins;
        let state = &mut self.state;

        app.update_overlay(delta_time, &mut |drawer: &mut dyn Drawer| {
            HookDispatcher::new(hooks, &mut plugins[..], &mut *state).on_update_ui_overlay(drawer)
        })?;
        app.update(delta_time)?;

        if let Some(context) = app.render_context() {
            HookDispatcher::new(hooks, &mut plugins[..], &mut *state).on_post_draw(context)?;
        }
        Ok(())
    }

    /// Fires the app-close hook and finishes the active application.
    fn close_app(&mut self) -> Result<()> {
        let Some(mut app) = self.active_app.take() else {
            return Ok(());
        };
        let id = self
            .app_id
            .clone()
            .unwrap_or_else(|| app.name().to_string());
        let runtime = self.timer.stop();
        tracing::info!("App {} closed (runtime: {:.1}s)", id, runtime.as_secs_f32());

        let result = self.dispatcher().on_app_close(&id);
        app.finish();
        result
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> Result<()> {
        match event {
            WindowEvent::Input(input) => self.input_event(&input),
            WindowEvent::Resize { width, height } => self.resize(width, height),
            WindowEvent::Focus(focused) => {
                self.state.set_focus(focused);
                Ok(())
            }
        }
    }

    /// Resizes the window, never below the minimum window size, and forwards
    /// the granted extent to the active application.
    ///
    /// Zero-sized requests (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let Some(window) = self.state.window.as_mut() else {
            return Ok(());
        };

        let extent = Extent::new(width, height)
            .clamp_min(Extent::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        let actual = window.resize(extent);

        if let Some(app) = self.active_app.as_mut() {
            app.resize(actual.width, actual.height)?;
        }
        Ok(())
    }

    /// Forwards `event` to the active application when input processing is
    /// enabled. Escape and Back close the platform regardless.
    pub fn input_event(&mut self, event: &InputEvent) -> Result<()> {
        let mut result = Ok(());
        if self.state.process_input_events {
            if let Some(app) = self.active_app.as_mut() {
                result = app.input_event(event);
            }
        }

        if event.is_exit_request() {
            tracing::debug!("Exit key pressed, closing");
            self.close();
        }
        result
    }

    /// Requests the platform to close.
    pub fn close(&mut self) {
        self.state.close();
    }

    /// Requests `app` to start at the next frame.
    pub fn request_application(&mut self, app: AppInfo) {
        self.state.request_application(app);
    }

    /// Prints usage or guidance for `code` and tears everything down.
    ///
    /// The active application is closed and finished, the window released,
    /// the log writer guard dropped and the platform-close hook fired.
    pub fn terminate(&mut self, code: ExitCode) {
        match code {
            ExitCode::Help => self.log_help(),
            ExitCode::NoSample => log_no_sample(),
            _ => {}
        }

        if self.active_app.is_some() {
            if let Err(e) = self.close_app() {
                tracing::error!("App close hook failed: {}", e);
            }
        }

        self.state.window = None;
        self.log_guard = None;

        if let Err(e) = self.dispatcher().on_platform_close() {
            tracing::error!("Platform close hook failed: {}", e);
        }
        self.terminated = true;
        tracing::debug!("Platform terminated ({})", code);

        // Keep the console open on unsuccessful exits unless asked not to.
        #[cfg(windows)]
        if !code.is_success() && !self.exit_pause_suppressed() {
            wait_for_return();
        }
    }

    fn log_help(&self) {
        tracing::info!("");
        tracing::info!("\tsamplehost");
        tracing::info!("");
        tracing::info!("\t\tHosts sample applications and the plugins that drive them.");
        tracing::info!("");
        tracing::info!("\tUsage: samplehost <COMMAND> [OPTIONS]");
        tracing::info!("");
        tracing::info!("\t\tOptions:");
        tracing::info!("\t\t\t-h,--help                   Print this help message and exit");

        let width = self.help_column_width();
        for plugin in &self.plugins {
            plugin.log_help(width + 2);
        }
    }

    /// Width of the name column in the usage text.
    pub fn help_column_width(&self) -> usize {
        self.plugins
            .iter()
            .flat_map(|plugin| plugin.commands().iter().chain(plugin.options()))
            .map(|flag| flag.name.len())
            .fold(4, usize::max)
    }

    /// Returns true when a plugin in use suppresses the exit pause.
    pub fn exit_pause_suppressed(&self) -> bool {
        self.registry
            .active_plugins()
            .iter()
            .filter_map(|id| self.plugins.get(id.index()))
            .any(|plugin| plugin.suppresses_exit_pause())
    }

    fn dispatcher(&mut self) -> HookDispatcher<'_> {
        HookDispatcher::new(self.registry.hooks(), &mut self.plugins, &mut self.state)
    }

    /// Current lifecycle state.
    pub fn run_state(&self) -> RunState {
        let window_closing = self
            .state
            .window
            .as_ref()
            .is_some_and(|window| window.should_close());

        if self.terminated {
            RunState::Terminated
        } else if self.state.close_requested || window_closing {
            RunState::Closing
        } else if self.active_app.is_some() {
            RunState::Running
        } else if self.state.app_requested() {
            RunState::Starting
        } else {
            RunState::Idle
        }
    }

    /// Command-line arguments the platform was created with.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Message of the failure that ended the run, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The active application.
    pub fn app(&self) -> Option<&dyn Application> {
        self.active_app.as_deref()
    }

    /// Id of the most recently started or attempted application.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// The window, once created.
    pub fn window(&self) -> Option<&dyn Window> {
        self.state.window()
    }

    /// Host state plugins see.
    pub fn host(&self) -> &PlatformState {
        &self.state
    }

    /// Command, option and hook tables.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }
}

fn log_no_sample() {
    tracing::info!("");
    tracing::info!("No sample was requested or the selected sample does not exist");
    tracing::info!("");
    tracing::info!("To run a specific sample use the \"sample\" argument, e.g.");
    tracing::info!("");
    tracing::info!("\tsamplehost sample hello");
    tracing::info!("");
    tracing::info!("To get a list of available samples, use the \"samples\" argument");
    tracing::info!(
        "To get a list of available command line options, use the \"-h\" or \"--help\" argument"
    );
    tracing::info!("");
}

#[cfg(windows)]
fn wait_for_return() {
    use std::io::{BufRead, Write};

    print!("Press return to continue");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
