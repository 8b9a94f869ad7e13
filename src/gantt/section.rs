//! Section grouping for Gantt tasks.

use super::task::Task;

/// An ordered, named group of tasks.
///
/// Section ids form their own namespace, separate from task ids; the tasks
/// inside a section still live in the diagram-wide task namespace. Populate
/// a section through [`Gantt::add_task_in`].
///
/// [`Gantt::add_task_in`]: super::Gantt::add_task_in
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    pub(crate) tasks: Vec<Task>,
}

impl Section {
    pub(crate) fn new(id: &str) -> Self {
        Section {
            id: id.to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tasks in declaration order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// `section` header plus one line per task.
    pub(crate) fn render(&self) -> String {
        let mut text = format!("section {}\n", self.id);
        for task in &self.tasks {
            text.push_str(&task.render());
        }
        text
    }
}
