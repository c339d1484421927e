use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Background for zebra rows: even rows black, odd rows dark grey
pub(super) fn stripe_color(index: usize) -> Color {
    if index % 2 == 0 {
        Color::Black
    } else {
        Color::DarkGrey
    }
}

pub(super) fn striped_cell(text: &str, index: usize, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if use_color {
        cell.fg(Color::White).bg(stripe_color(index))
    } else {
        cell
    }
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized
/// header separator. Styling is forced on when color was requested so
/// `--color=always` survives a pipe.
pub(super) fn create_styled_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}
