//! Query text for the bulk retrieval path

/// Tables the bulk path reads from
pub const REQUIRED_TABLES: [&str; 3] = ["item", "transaction", "transactionline"];

/// Trivial query proving the endpoint and credentials work
pub const CONNECTIVITY_CHECK: &str = "SELECT 1 AS ok";

/// Transaction type code for sales orders
pub const SALES_ORDER_TYPE: &str = "SalesOrd";

/// Comma-joined ID list for an `IN (...)` clause
pub fn id_list(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Existence probe for one table
pub fn table_probe_query(table: &str) -> String {
    format!(r#"SELECT 1 FROM "{}" FETCH NEXT 1 ROWS ONLY"#, table)
}

/// Resolved sales orders among `ids`
pub fn verify_sales_orders_query(ids: &[i64]) -> String {
    format!(
        r#"
        SELECT id, tranid, "type"
        FROM "transaction"
        WHERE id IN ({})
          AND "type" = '{}'
        "#,
        id_list(ids),
        SALES_ORDER_TYPE
    )
}

/// Open, non-mainline lines of the given transactions with item display names
pub fn sales_order_lines_query(ids: &[i64]) -> String {
    format!(
        r#"
        SELECT
            tl.transaction AS so_id,
            tl.item        AS item_id,
            i.itemid       AS item_name,
            tl.quantity    AS line_qty
        FROM "transactionline" tl
        LEFT JOIN "item" i ON i.id = tl.item
        WHERE tl.transaction IN ({})
          AND tl.mainline = 'F'
          AND NVL(tl.isclosed, 'F') = 'F'
        "#,
        id_list(ids)
    )
}

/// Raw lines with a negative quantity, for auditing before absolute normalization
pub fn negative_lines_query(ids: &[i64]) -> String {
    format!(
        r#"
        SELECT
            tl.transaction AS so_id,
            tl.item        AS item_id,
            i.itemid       AS item_name,
            tl.quantity    AS line_qty
        FROM "transactionline" tl
        LEFT JOIN "item" i ON i.id = tl.item
        WHERE tl.transaction IN ({})
          AND tl.mainline = 'F'
          AND tl.quantity < 0
        ORDER BY so_id, item_name
        "#,
        id_list(ids)
    )
}
