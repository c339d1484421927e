mod format;
mod tasks;

pub(crate) use tasks::print_task_table;
