use crate::schema::Table;

/// Builds `row_count` numbered placeholder tuples of `width` parameters each.
///
/// Numbering starts at `$1` and runs row by row, matching the order in which the caller
/// flattens row values into the parameter slice.
///
/// # Examples
///
/// `placeholder_tuples(2, 3)` yields `($1,$2,$3),($4,$5,$6)`.
pub fn placeholder_tuples(row_count: usize, width: usize) -> String {
    let mut tuples = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let base = row * width;
        let placeholders: Vec<String> = (1..=width).map(|i| format!("${}", base + i)).collect();
        tuples.push(format!("({})", placeholders.join(",")));
    }
    tuples.join(",")
}

/// Builds the bulk upsert statement for `row_count` rows of `table`.
///
/// Every column returned by [`Table::update_columns`] is overwritten with its `EXCLUDED`
/// value when the table's conflict target is hit.
///
/// # Arguments
///
/// * `table` - Destination table.
/// * `row_count` - Number of value tuples in the statement; must be non-zero.
///
/// # Returns
///
/// The SQL text, ready to be executed with `row_count * insert_columns().len()` parameters.
pub fn build_upsert_statement(table: Table, row_count: usize) -> String {
    let columns = table.insert_columns();
    let assignments: Vec<String> = table
        .update_columns()
        .iter()
        .map(|column| format!("{column} = EXCLUDED.{column}"))
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES {} ON CONFLICT ({}) DO UPDATE SET {}",
        table.name(),
        columns.join(", "),
        placeholder_tuples(row_count, columns.len()),
        table.conflict_target(),
        assignments.join(", ")
    )
}
