// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembly of a standard panel.
//!
//! A standard panel is, along the primary axis: the launcher, one taskbar per
//! desktop, the systray, the battery and the clock. Everything but the
//! taskbars is sized by content; the visible taskbars share what is left.
//!
//! [`PanelBuilder`] registers the theme once and hands the same
//! [`StyleRegistry`] to every window it builds, so all monitors share one
//! set of style records. Each [`build`](PanelBuilder::build) returns the
//! window and a [`PanelNodes`] map used to feed it data afterwards.

use std::rc::Rc;
use std::sync::Arc;

use shelf_core::layout::{LayoutContext, Orientation, Padding, SizingMode};
use shelf_core::node::NodeId;
use shelf_core::output::OutputId;
use shelf_core::style::{StyleId, StyleRegistry};
use shelf_core::window::PanelWindow;
use shelf_render::{Color, IntSize};

use crate::battery::{Battery, ChargeState};
use crate::clock::Clock;
use crate::launcher::{Launcher, LauncherEntry, LauncherIcon};
use crate::panel::{Panel, Theme, ThemeStyles};
use crate::systray::{Placement, Systray, TrayIcon};
use crate::taskbar::{Task, TaskPalette, Taskbar, WindowId};
use crate::text::TextMetrics;
use crate::tooltip::Tooltip;

/// Construction parameters of a standard panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Primary-axis direction.
    pub orientation: Orientation,
    /// Padding of the panel root.
    pub padding: Padding,
    /// Padding inside each taskbar.
    pub taskbar_padding: Padding,
    /// Padding inside the launcher.
    pub launcher_padding: Padding,
    /// Padding inside the systray.
    pub systray_padding: Padding,
    /// Largest primary-axis size of one task; `0` means no cap.
    pub max_task_size: u32,
    /// Number of desktops, and so of taskbars. At least one is created.
    pub desktops: u32,
    /// Show every desktop's taskbar instead of only the current one.
    pub all_desktops: bool,
    /// Launcher entries, in order.
    pub launcher: Vec<LauncherEntry>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            padding: Padding::new(2, 2, 2),
            taskbar_padding: Padding::new(0, 2, 0),
            launcher_padding: Padding::new(0, 2, 0),
            systray_padding: Padding::new(0, 2, 0),
            max_task_size: 200,
            desktops: 1,
            all_desktops: false,
            launcher: Vec::new(),
        }
    }
}

/// Builds standard panels sharing one theme.
#[derive(Debug)]
pub struct PanelBuilder {
    metrics: Rc<dyn TextMetrics>,
    config: PanelConfig,
    theme: Theme,
    styles: ThemeStyles,
    registry: Arc<StyleRegistry>,
}

impl PanelBuilder {
    /// Creates a builder with the default theme and configuration.
    #[must_use]
    pub fn new(metrics: Rc<dyn TextMetrics>) -> Self {
        Self::with_theme(metrics, Theme::default())
    }

    /// Creates a builder with a custom theme.
    #[must_use]
    pub fn with_theme(metrics: Rc<dyn TextMetrics>, theme: Theme) -> Self {
        let mut registry = StyleRegistry::new();
        let styles = theme.register(&mut registry);
        Self {
            metrics,
            config: PanelConfig::default(),
            theme,
            styles,
            registry: Arc::new(registry),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// The shared style registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<StyleRegistry> {
        &self.registry
    }

    /// Registry handles of the theme.
    #[must_use]
    pub fn styles(&self) -> ThemeStyles {
        self.styles
    }

    /// Builds the panel window for one monitor.
    #[must_use]
    pub fn build(&self, output: OutputId, size: IntSize) -> (PanelWindow, PanelNodes) {
        let cfg = &self.config;
        let ctx = LayoutContext {
            orientation: cfg.orientation,
        };
        let mut window = PanelWindow::new(output, ctx, Arc::clone(&self.registry), Panel, size);
        let root = window.root();
        let text = self.theme.text;
        let store = window.store_mut();
        store.set_style(root, self.styles.panel);
        store.set_padding(root, cfg.padding);

        let launcher = store.create_node(Launcher, SizingMode::ByContent);
        store.set_style(launcher, self.styles.launcher);
        store.set_padding(launcher, cfg.launcher_padding);
        store.add_child(root, launcher);
        for entry in &cfg.launcher {
            let icon = store.create_node(LauncherIcon::new(entry.clone()), SizingMode::ByContent);
            store.add_child(launcher, icon);
        }

        let mut taskbars = Vec::new();
        for desktop in 0..cfg.desktops.max(1) {
            let bar = store.create_node(Taskbar::new(desktop), SizingMode::ByLayout);
            store.set_style(bar, self.styles.taskbar);
            store.set_padding(bar, cfg.taskbar_padding);
            store.set_max_flexible(bar, cfg.max_task_size);
            store.add_child(root, bar);
            if desktop != 0 && !cfg.all_desktops {
                store.hide(bar, ctx);
            }
            taskbars.push(bar);
        }

        let systray = store.create_node(Systray::new(), SizingMode::ByContent);
        store.set_style(systray, self.styles.systray);
        store.set_padding(systray, cfg.systray_padding);
        store.add_child(root, systray);

        let battery = store.create_node(
            Battery::new(Rc::clone(&self.metrics), text),
            SizingMode::ByContent,
        );
        store.set_style(battery, self.styles.battery);
        store.add_child(root, battery);

        let clock = store.create_node(
            Clock::new(Rc::clone(&self.metrics), text),
            SizingMode::ByContent,
        );
        store.set_style(clock, self.styles.clock);
        store.add_child(root, clock);

        let nodes = PanelNodes {
            launcher,
            taskbars,
            systray,
            battery,
            clock,
            metrics: Rc::clone(&self.metrics),
            text,
            task_style: self.styles.task,
            palette: self.theme.task_palette,
            current_desktop: 0,
            all_desktops: cfg.all_desktops,
        };
        (window, nodes)
    }

    /// Builds a tooltip window showing `text`, sized around it.
    #[must_use]
    pub fn tooltip(&self, output: OutputId, text: &str) -> PanelWindow {
        let tooltip = Tooltip::new(Rc::clone(&self.metrics), text, self.theme.text);
        let mut window = PanelWindow::with_root(
            output,
            LayoutContext::HORIZONTAL,
            Arc::clone(&self.registry),
            tooltip,
            SizingMode::ByContent,
        );
        let root = window.root();
        window.store_mut().set_style(root, self.styles.tooltip);
        window
    }
}

/// Handles to the parts of a built panel, and the operations that feed it.
#[derive(Clone, Debug)]
pub struct PanelNodes {
    /// The launcher container.
    pub launcher: NodeId,
    /// One taskbar per desktop, by desktop index.
    pub taskbars: Vec<NodeId>,
    /// The systray container.
    pub systray: NodeId,
    /// The battery indicator.
    pub battery: NodeId,
    /// The clock.
    pub clock: NodeId,
    metrics: Rc<dyn TextMetrics>,
    text: Color,
    task_style: StyleId,
    palette: TaskPalette,
    current_desktop: u32,
    all_desktops: bool,
}

impl PanelNodes {
    /// Desktop whose taskbar is shown.
    #[must_use]
    pub fn current_desktop(&self) -> u32 {
        self.current_desktop
    }

    /// Adds a task for `window` to the taskbar of `desktop`.
    ///
    /// Returns `None` when there is no such desktop.
    pub fn add_task(
        &self,
        panel: &mut PanelWindow,
        desktop: u32,
        window: WindowId,
        title: &str,
    ) -> Option<NodeId> {
        let bar = *self.taskbars.get(usize::try_from(desktop).ok()?)?;
        let task = Task::new(Rc::clone(&self.metrics), window, title, self.text)
            .with_palette(self.palette);
        let store = panel.store_mut();
        let id = store.create_node(task, SizingMode::ByLayout);
        store.set_style(id, self.task_style);
        store.add_child(bar, id);
        Some(id)
    }

    /// Finds the task node of `window` on any desktop.
    #[must_use]
    pub fn find_task(&self, panel: &PanelWindow, window: WindowId) -> Option<NodeId> {
        let store = panel.store();
        self.taskbars
            .iter()
            .flat_map(move |&bar| store.children(bar))
            .find(|&id| store.widget::<Task>(id).is_some_and(|t| t.window() == window))
    }

    /// Removes the task of `window`. Returns whether there was one.
    pub fn remove_task(&self, panel: &mut PanelWindow, window: WindowId) -> bool {
        let Some(id) = self.find_task(panel, window) else {
            return false;
        };
        panel.store_mut().destroy_node(id);
        true
    }

    /// Moves the task of `window` to the taskbar of `desktop`.
    ///
    /// Returns whether both the task and the desktop exist.
    pub fn move_task(&self, panel: &mut PanelWindow, window: WindowId, desktop: u32) -> bool {
        let Some(bar) = usize::try_from(desktop)
            .ok()
            .and_then(|d| self.taskbars.get(d).copied())
        else {
            return false;
        };
        let Some(id) = self.find_task(panel, window) else {
            return false;
        };
        if panel.store().parent(id) != Some(bar) {
            panel.store_mut().reparent(id, bar);
        }
        true
    }

    /// Replaces the title of `window`'s task.
    pub fn set_task_title(&self, panel: &mut PanelWindow, window: WindowId, title: &str) {
        if let Some(id) = self.find_task(panel, window) {
            panel.store_mut().edit::<Task>(id, |t| t.set_title(title));
        }
    }

    /// Marks `window`'s task as demanding attention or not.
    pub fn set_task_urgent(&self, panel: &mut PanelWindow, window: WindowId, urgent: bool) {
        if let Some(id) = self.find_task(panel, window) {
            panel.store_mut().edit::<Task>(id, |t| t.set_urgent(urgent));
        }
    }

    /// Highlights the task of the focused window, if any, and clears the
    /// others.
    pub fn set_active_window(&self, panel: &mut PanelWindow, active: Option<WindowId>) {
        let store = panel.store();
        let tasks: Vec<NodeId> = self
            .taskbars
            .iter()
            .flat_map(move |&bar| store.children(bar))
            .collect();
        let store = panel.store_mut();
        for id in tasks {
            store.edit::<Task>(id, |t| t.set_active(Some(t.window()) == active));
        }
    }

    /// Switches desktops: unless every taskbar is shown, only the taskbar of
    /// `desktop` stays visible. Unknown desktops are ignored.
    pub fn set_current_desktop(&mut self, panel: &mut PanelWindow, desktop: u32) {
        let Ok(index) = usize::try_from(desktop) else {
            return;
        };
        if index >= self.taskbars.len() || desktop == self.current_desktop {
            return;
        }
        self.current_desktop = desktop;
        if self.all_desktops {
            return;
        }
        let ctx = panel.context();
        let store = panel.store_mut();
        for (i, &bar) in self.taskbars.iter().enumerate() {
            match (i == index, store.is_visible(bar)) {
                (true, false) => store.show(bar),
                (false, true) => store.hide(bar, ctx),
                _ => {}
            }
        }
    }

    /// Adds a launcher icon at the end of the launcher.
    pub fn add_launcher_entry(&self, panel: &mut PanelWindow, entry: LauncherEntry) -> NodeId {
        let store = panel.store_mut();
        let id = store.create_node(LauncherIcon::new(entry), SizingMode::ByContent);
        store.add_child(self.launcher, id);
        id
    }

    /// Reserves a tray slot for the embedded client `window`.
    pub fn add_tray_icon(&self, panel: &mut PanelWindow, window: WindowId) -> Option<NodeId> {
        let store = panel.store_mut();
        let icon = store.widget::<Systray>(self.systray)?.icon(window);
        let id = store.create_node(icon, SizingMode::ByContent);
        store.add_child(self.systray, id);
        Some(id)
    }

    /// Drops the tray slot of `window`. Returns whether there was one.
    pub fn remove_tray_icon(&self, panel: &mut PanelWindow, window: WindowId) -> bool {
        let store = panel.store();
        let found = store.children(self.systray).find(|&id| {
            store
                .widget::<TrayIcon>(id)
                .is_some_and(|icon| icon.window() == window)
        });
        let Some(id) = found else {
            return false;
        };
        panel.store_mut().destroy_node(id);
        true
    }

    /// Drains the tray placements queued by the last frames.
    pub fn take_placements(&self, panel: &mut PanelWindow) -> Vec<Placement> {
        panel
            .store_mut()
            .widget_mut::<Systray>(self.systray)
            .map(Systray::take_placements)
            .unwrap_or_default()
    }

    /// Updates the clock lines.
    pub fn set_clock(&self, panel: &mut PanelWindow, time: &str, date: Option<&str>) {
        panel
            .store_mut()
            .edit::<Clock>(self.clock, |c| c.set_lines(time, date));
    }

    /// Updates the battery reading.
    pub fn set_battery(&self, panel: &mut PanelWindow, percentage: u8, state: ChargeState) {
        panel
            .store_mut()
            .edit::<Battery>(self.battery, |b| b.set_reading(percentage, state));
    }
}
