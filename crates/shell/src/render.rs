//! Text rendering of inventory items.

use std::io::{self, Write};

use stockroom_inventory::Item;

pub const COLUMNS: [&str; 4] = ["ID", "Name", "Quantity (KG)", "Price (MWK)"];

/// Prices are shown in kwacha with two decimals, e.g. `K2.50`.
pub fn format_price(price: f64) -> String {
    format!("K{price:.2}")
}

pub fn table_row(item: &Item) -> [String; 4] {
    [
        item.id.clone(),
        item.name.clone(),
        item.quantity.to_string(),
        format_price(item.price),
    ]
}

/// Write `items` as an aligned table with a header row.
pub fn write_table<'a, W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Item>,
{
    let rows: Vec<[String; 4]> = items.into_iter().map(table_row).collect();

    let mut widths = COLUMNS.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &COLUMNS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 4], widths: &[usize; 4]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

/// Detail block shown for a search hit.
pub fn write_details<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "Item Found!")?;
    writeln!(out, "ID: {}", item.id)?;
    writeln!(out, "Name: {}", item.name)?;
    writeln!(out, "Quantity: {} KG", item.quantity)?;
    writeln!(out, "Price: {}", format_price(item.price))
}
