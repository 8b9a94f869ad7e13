//! Gantt chart builder: sections, tasks and the `gantt` dialect renderer.

mod section;
mod task;

pub use section::Section;
pub use task::{Task, TaskConfig};

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::live;

/// X axis scale formats for the rendered chart.
///
/// Without an explicit `axisFormat` statement the viewer falls back to
/// plain dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisFormat {
    DateTime24WithSeconds,    // %Y-%m-%d %H:%M:%S
    DateTime24,               // %Y-%m-%d %H:%M
    DateTime24Short,          // %y%m%d %H:%M
    Date,                     // %Y-%m-%d
    DateShort,                // %y%m%d
    WeekdayTime24,            // %a %H:%M
    WeekdayTime24WithSeconds, // %a %H:%M:%S
    Time24,                   // %H:%M
    Time24WithSeconds,        // %H:%M:%S
    /// Any other format string, passed through verbatim.
    Custom(String),
}

impl AxisFormat {
    pub fn as_str(&self) -> &str {
        match self {
            AxisFormat::DateTime24WithSeconds => "%Y-%m-%d %H:%M:%S",
            AxisFormat::DateTime24 => "%Y-%m-%d %H:%M",
            AxisFormat::DateTime24Short => "%y%m%d %H:%M",
            AxisFormat::Date => "%Y-%m-%d",
            AxisFormat::DateShort => "%y%m%d",
            AxisFormat::WeekdayTime24 => "%a %H:%M",
            AxisFormat::WeekdayTime24WithSeconds => "%a %H:%M:%S",
            AxisFormat::Time24 => "%H:%M",
            AxisFormat::Time24WithSeconds => "%H:%M:%S",
            AxisFormat::Custom(fmt) => fmt,
        }
    }
}

/// Where a task is stored: the local list or a section's list.
#[derive(Debug, Clone, Copy)]
enum TaskSlot {
    Local(usize),
    InSection { section: usize, task: usize },
}

/// Aggregate owning every section and task of one Gantt diagram.
///
/// Sections and local (section-less) tasks keep insertion order for
/// rendering; lookups go through identifier maps. Section ids and task ids
/// are two separate namespaces, but one task id is unique across the whole
/// diagram regardless of which section owns it. Append-only, like
/// [`Flowchart`].
///
/// [`Flowchart`]: crate::Flowchart
#[derive(Debug, Clone, Default)]
pub struct Gantt {
    sections: Vec<Section>,
    section_index: HashMap<String, usize>,
    local_tasks: Vec<Task>,
    task_index: HashMap<String, TaskSlot>,
    /// Title line of the diagram.
    pub title: Option<String>,
    /// Optional x axis scale format.
    pub axis_format: Option<AxisFormat>,
}

impl Gantt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section.
    ///
    /// Fails on a duplicate or grammar-breaking id, without mutating
    /// anything.
    pub fn add_section(&mut self, id: &str) -> Result<&mut Section> {
        task::validate_id(id)?;
        if self.section_index.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let slot = self.sections.len();
        self.section_index.insert(id.to_string(), slot);
        self.sections.push(Section::new(id));
        Ok(&mut self.sections[slot])
    }

    /// Add a task directly to the diagram, outside any section.
    ///
    /// Fails on a duplicate or grammar-breaking id, or on a config that
    /// sets both `start` and `after`; nothing is mutated on failure.
    pub fn add_task(&mut self, id: &str, config: TaskConfig) -> Result<&mut Task> {
        task::validate_id(id)?;
        config.validate()?;
        if self.task_index.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let slot = self.local_tasks.len();
        self.task_index.insert(id.to_string(), TaskSlot::Local(slot));
        self.local_tasks.push(Task::new(id, config));
        Ok(&mut self.local_tasks[slot])
    }

    /// Add a task to an existing section.
    ///
    /// The task id must be free in the diagram-wide task namespace, not
    /// just within the section.
    pub fn add_task_in(&mut self, section: &str, id: &str, config: TaskConfig) -> Result<&mut Task> {
        task::validate_id(id)?;
        config.validate()?;
        let section_slot = *self
            .section_index
            .get(section)
            .ok_or_else(|| Error::UnknownSection(section.to_string()))?;
        if self.task_index.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let task_slot = self.sections[section_slot].tasks.len();
        self.task_index.insert(
            id.to_string(),
            TaskSlot::InSection {
                section: section_slot,
                task: task_slot,
            },
        );
        self.sections[section_slot].tasks.push(Task::new(id, config));
        Ok(&mut self.sections[section_slot].tasks[task_slot])
    }

    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.get(*self.section_index.get(id)?)
    }

    pub fn get_section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.get_mut(*self.section_index.get(id)?)
    }

    /// Look up a task anywhere in the diagram.
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        match *self.task_index.get(id)? {
            TaskSlot::Local(i) => self.local_tasks.get(i),
            TaskSlot::InSection { section, task } => self.sections.get(section)?.tasks.get(task),
        }
    }

    pub fn get_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        match *self.task_index.get(id)? {
            TaskSlot::Local(i) => self.local_tasks.get_mut(i),
            TaskSlot::InSection { section, task } => {
                self.sections.get_mut(section)?.tasks.get_mut(task)
            }
        }
    }

    /// All sections, in add order.
    pub fn list_sections(&self) -> &[Section] {
        &self.sections
    }

    /// Tasks added directly to the diagram, in add order.
    pub fn list_local_tasks(&self) -> &[Task] {
        &self.local_tasks
    }

    /// Every task in the diagram, sorted lexicographically by id.
    ///
    /// Recomputed on each call, so tasks added after an earlier listing are
    /// included.
    pub fn list_tasks(&self) -> Vec<&Task> {
        let mut all: Vec<&Task> = self
            .local_tasks
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.tasks.iter()))
            .collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Render the whole diagram to `gantt` dialect text.
    ///
    /// Header and `dateFormat` directive, optional `axisFormat` and `title`
    /// lines, local task lines, then section blocks, everything in
    /// insertion order. An empty diagram renders just the header and
    /// directive.
    pub fn render(&self) -> String {
        let mut text = String::from("gantt\ndateFormat YYYY-MM-DDTHH:mm:ssZ\n");
        if let Some(axis) = &self.axis_format {
            text.push_str(&format!("axisFormat {}\n", axis.as_str()));
        }
        if let Some(title) = &self.title {
            text.push_str(&format!("title {}\n", title));
        }
        for task in &self.local_tasks {
            text.push_str(&task.render());
        }
        for section in &self.sections {
            text.push_str(&section.render());
        }
        text
    }

    /// Render the diagram and encode it as a mermaid.live view URL.
    pub fn live_url(&self) -> Result<String> {
        live::live_url(&self.render())
    }

    /// Open the diagram's live-editor URL in the OS default browser.
    pub fn view_in_browser(&self) -> Result<()> {
        live::open_in_browser(&self.live_url()?)
    }
}

impl fmt::Display for Gantt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
