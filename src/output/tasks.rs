use crate::output::format::{create_styled_table, header_cell, striped_cell};
use crate::tasks::TaskRegistry;

/// Render the prefix list shown before the prompt loop starts
pub(crate) fn render_task_table(registry: &TaskRegistry, use_color: bool) -> String {
    let mut table = create_styled_table(use_color);
    table.set_header(vec![
        header_cell("Prefix", use_color),
        header_cell("Task", use_color),
    ]);

    for (i, task) in registry.iter().enumerate() {
        table.add_row(vec![
            striped_cell(&task.prefix, i, use_color),
            striped_cell(&task.task, i, use_color),
        ]);
    }

    table.to_string()
}

pub(crate) fn print_task_table(registry: &TaskRegistry, use_color: bool) {
    println!();
    println!("Available tasks:");
    if registry.is_empty() {
        println!("(none, add entries to the task file)");
    } else {
        println!("{}", render_task_table(registry, use_color));
    }
    println!();
}
