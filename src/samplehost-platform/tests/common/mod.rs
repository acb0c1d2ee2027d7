//! Test doubles shared by the platform integration tests.
//!
//! Plugins and windows report into an `Rc<RefCell<..>>` journal the test body
//! keeps. Applications must be `Send + Sync` factories, so they report
//! through `Arc<Mutex<..>>` instead.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use samplehost_core::{
    AppInfo, Application, ApplicationContext, Drawer, Extent, HostError, InputEvent,
    RenderContext, Result, Window, WindowEvent, WindowFactory, WindowProperties,
};
use samplehost_plugins::{Flag, Hook, Host, Plugin};

// ============================================================================
// PLUGIN
// ============================================================================

pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// A plugin whose claims and reactions are configured by the test.
pub struct MockPlugin {
    name: &'static str,
    commands: Vec<Flag>,
    options: Vec<Flag>,
    hooks: Vec<Hook>,
    journal: Journal,
    refuse: bool,
    takes_value: bool,
    close_on_trigger: bool,
    trigger_app: Option<AppInfo>,
    fallbacks: VecDeque<AppInfo>,
    suppresses_pause: bool,
    disable_input: bool,
    simulation_fps: Option<f32>,
    always_render: bool,
    fail_update_hook_on: Option<usize>,
    update_hook_calls: usize,
}

impl MockPlugin {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            commands: Vec::new(),
            options: Vec::new(),
            hooks: Vec::new(),
            journal: Rc::clone(journal),
            refuse: false,
            takes_value: false,
            close_on_trigger: false,
            trigger_app: None,
            fallbacks: VecDeque::new(),
            suppresses_pause: false,
            disable_input: false,
            simulation_fps: None,
            always_render: false,
            fail_update_hook_on: None,
            update_hook_calls: 0,
        }
    }

    pub fn command(mut self, name: &'static str) -> Self {
        self.commands.push(Flag::new(name, "test command"));
        self
    }

    pub fn option(mut self, name: &'static str) -> Self {
        self.options.push(Flag::new(name, "test option"));
        self
    }

    pub fn hooks(mut self, hooks: &[Hook]) -> Self {
        self.hooks.extend_from_slice(hooks);
        self
    }

    /// Handlers report that they did not handle their token.
    pub fn refusing(mut self) -> Self {
        self.refuse = true;
        self
    }

    /// Option handlers consume the following token as their value.
    pub fn taking_value(mut self) -> Self {
        self.takes_value = true;
        self
    }

    pub fn closing_on_trigger(mut self) -> Self {
        self.close_on_trigger = true;
        self
    }

    pub fn requesting(mut self, app: AppInfo) -> Self {
        self.trigger_app = Some(app);
        self
    }

    /// Applications requested, one per app error.
    pub fn falling_back_to(mut self, apps: Vec<AppInfo>) -> Self {
        self.fallbacks = apps.into();
        self
    }

    pub fn suppressing_exit_pause(mut self) -> Self {
        self.suppresses_pause = true;
        self
    }

    pub fn disabling_input(mut self) -> Self {
        self.disable_input = true;
        self
    }

    pub fn simulating_at(mut self, fps: f32) -> Self {
        self.simulation_fps = Some(fps);
        self
    }

    pub fn always_rendering(mut self) -> Self {
        self.always_render = true;
        self
    }

    /// The on-update hook fails on its `call`-th invocation (1-based).
    pub fn failing_update_hook_on(mut self, call: usize) -> Self {
        self.fail_update_hook_on = Some(call);
        self
    }

    pub fn boxed(self) -> Box<dyn Plugin> {
        Box::new(self)
    }

    fn record(&self, entry: String) {
        self.journal.borrow_mut().push(entry);
    }
}

impl Plugin for MockPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn commands(&self) -> &[Flag] {
        &self.commands
    }

    fn options(&self) -> &[Flag] {
        &self.options
    }

    fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    fn handle_command(
        &mut self,
        command: &str,
        _args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        self.record(format!("{}:command:{command}", self.name));
        !self.refuse
    }

    fn handle_option(
        &mut self,
        option: &str,
        args: &mut VecDeque<String>,
        _host: &mut dyn Host,
    ) -> bool {
        self.record(format!("{}:option:{option}", self.name));
        if self.takes_value {
            match args.pop_front() {
                Some(value) => self.record(format!("{}:value:{value}", self.name)),
                None => return false,
            }
        }
        !self.refuse
    }

    fn trigger_command(&mut self, host: &mut dyn Host) {
        self.record(format!("{}:trigger", self.name));
        if let Some(app) = self.trigger_app.take() {
            host.request_application(app);
        }
        if self.close_on_trigger {
            host.close();
        }
        if self.disable_input {
            host.disable_input_processing();
        }
        if let Some(fps) = self.simulation_fps {
            host.force_simulation_fps(fps);
        }
        if self.always_render {
            host.force_render(true);
        }
    }

    fn suppresses_exit_pause(&self) -> bool {
        self.suppresses_pause
    }

    fn on_post_draw(
        &mut self,
        context: &mut dyn RenderContext,
        _host: &mut dyn Host,
    ) -> Result<()> {
        self.record(format!("{}:post_draw:{}", self.name, context.frame_count()));
        Ok(())
    }

    fn on_app_error(&mut self, app_id: &str, host: &mut dyn Host) -> Result<()> {
        self.record(format!("{}:app_error:{app_id}", self.name));
        if let Some(next) = self.fallbacks.pop_front() {
            host.request_application(next);
        }
        Ok(())
    }

    fn on_update(&mut self, _delta_time: f32, _host: &mut dyn Host) -> Result<()> {
        self.record(format!("{}:update", self.name));
        self.update_hook_calls += 1;
        if self.fail_update_hook_on == Some(self.update_hook_calls) {
            return Err(HostError::plugin(self.name, "update hook failed"));
        }
        Ok(())
    }

    fn on_app_start(&mut self, app_id: &str, _host: &mut dyn Host) -> Result<()> {
        self.record(format!("{}:app_start:{app_id}", self.name));
        Ok(())
    }

    fn on_app_close(&mut self, app_id: &str, _host: &mut dyn Host) -> Result<()> {
        self.record(format!("{}:app_close:{app_id}", self.name));
        Ok(())
    }

    fn on_platform_close(&mut self, _host: &mut dyn Host) -> Result<()> {
        self.record(format!("{}:platform_close", self.name));
        Ok(())
    }

    fn on_update_ui_overlay(
        &mut self,
        drawer: &mut dyn Drawer,
        _host: &mut dyn Host,
    ) -> Result<()> {
        drawer.text(self.name);
        self.record(format!("{}:overlay", self.name));
        Ok(())
    }
}

// ============================================================================
// WINDOW
// ============================================================================

#[derive(Debug, Default)]
pub struct WindowProbe {
    pub created: usize,
    pub created_with: Option<WindowProperties>,
    pub resizes: Vec<Extent>,
    pub pending: Vec<WindowEvent>,
    pub closed: bool,
}

pub type SharedWindowProbe = Rc<RefCell<WindowProbe>>;

pub struct MockWindow {
    properties: WindowProperties,
    extent: Extent,
    probe: SharedWindowProbe,
}

impl Window for MockWindow {
    fn properties(&self) -> &WindowProperties {
        &self.properties
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    fn resize(&mut self, extent: Extent) -> Extent {
        self.probe.borrow_mut().resizes.push(extent);
        self.extent = extent;
        extent
    }

    fn close(&mut self) {
        self.probe.borrow_mut().closed = true;
    }

    fn should_close(&self) -> bool {
        self.probe.borrow().closed
    }

    fn process_events(&mut self) -> Result<Vec<WindowEvent>> {
        Ok(std::mem::take(&mut self.probe.borrow_mut().pending))
    }
}

pub fn window_factory(probe: &SharedWindowProbe) -> Box<dyn WindowFactory> {
    let probe = Rc::clone(probe);
    Box::new(
        move |properties: &WindowProperties| -> Result<Box<dyn Window>> {
            {
                let mut state = probe.borrow_mut();
                state.created += 1;
                state.created_with = Some(properties.clone());
            }
            Ok(Box::new(MockWindow {
                properties: properties.clone(),
                extent: properties.extent,
                probe: Rc::clone(&probe),
            }))
        },
    )
}

pub fn failing_window_factory() -> Box<dyn WindowFactory> {
    Box::new(|_: &WindowProperties| -> Result<Box<dyn Window>> {
        Err(HostError::window("no display available"))
    })
}

// ============================================================================
// APPLICATION
// ============================================================================

pub type AppJournal = Arc<Mutex<Vec<String>>>;

pub fn app_journal() -> AppJournal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &AppJournal, prefix: &str) -> usize {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .count()
}

/// Behaviour of a [`MockApp`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AppBehavior {
    /// Fail on this update call (1-based, the warm-start update included).
    pub fail_on_update: Option<usize>,
    pub fail_prepare: bool,
    /// Ask to close once this many updates ran.
    pub close_after: Option<usize>,
    pub render_context: bool,
}

struct Frames {
    frames: u64,
}

impl RenderContext for Frames {
    fn surface_extent(&self) -> Extent {
        Extent::new(1280, 720)
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }
}

struct Overlay {
    lines: Vec<String>,
}

impl Drawer for Overlay {
    fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn header(&mut self, _caption: &str) -> bool {
        true
    }

    fn checkbox(&mut self, _caption: &str, _value: &mut bool) -> bool {
        false
    }
}

pub struct MockApp {
    name: String,
    behavior: AppBehavior,
    updates: usize,
    journal: AppJournal,
    frames: Frames,
    overlay: Overlay,
}

impl MockApp {
    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

impl Application for MockApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn prepare(&mut self, context: &ApplicationContext<'_>) -> Result<()> {
        self.record(format!("prepare:{}:window={}", self.name, context.window.is_some()));
        if self.behavior.fail_prepare {
            return Err(HostError::application(&self.name, "prepare failed"));
        }
        Ok(())
    }

    fn update(&mut self, delta_time: f32) -> Result<()> {
        self.updates += 1;
        self.frames.frames += 1;
        self.record(format!("update:{}:{delta_time}", self.name));
        if self.behavior.fail_on_update == Some(self.updates) {
            return Err(HostError::application(&self.name, "update failed"));
        }
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.record(format!("resize:{}:{width}x{height}", self.name));
        Ok(())
    }

    fn input_event(&mut self, event: &InputEvent) -> Result<()> {
        self.record(format!("input:{}:{event}", self.name));
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.behavior
            .close_after
            .is_some_and(|limit| self.updates >= limit)
    }

    fn finish(&mut self) {
        self.record(format!("finish:{}", self.name));
    }

    fn drawer(&mut self) -> Option<&mut dyn Drawer> {
        Some(&mut self.overlay)
    }

    fn render_context(&mut self) -> Option<&mut dyn RenderContext> {
        if self.behavior.render_context {
            Some(&mut self.frames)
        } else {
            None
        }
    }
}

/// Descriptor creating a [`MockApp`] that reports into `journal`.
pub fn mock_app(id: &'static str, behavior: AppBehavior, journal: &AppJournal) -> AppInfo {
    let journal = Arc::clone(journal);
    AppInfo::new(id, format!("{id} app"), move || {
        journal.lock().unwrap().push(format!("create:{id}"));
        Ok(Box::new(MockApp {
            name: String::new(),
            behavior,
            updates: 0,
            journal: Arc::clone(&journal),
            frames: Frames { frames: 0 },
            overlay: Overlay { lines: Vec::new() },
        }) as Box<dyn Application>)
    })
}

/// Descriptor whose factory always fails.
pub fn broken_app(id: &'static str, journal: &AppJournal) -> AppInfo {
    let journal = Arc::clone(journal);
    AppInfo::new(id, id, move || {
        journal.lock().unwrap().push(format!("create:{id}"));
        Err(HostError::application(id, "factory failed"))
    })
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}
