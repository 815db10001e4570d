use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        db::{ExportTable, TableDump},
        sqlite::Store,
    },
};

pub fn routes() -> Vec<Route> {
    routes![export_table]
}

/// Dump a whole table. Only the tables on the allow-list can be named, so the
/// name never reaches SQL.
#[get("/api/export/<table_name>")]
async fn export_table(table_name: &str, store: &State<Store>) -> Result<Json<TableDump>> {
    let table: ExportTable = table_name.parse()?;
    let dump = store.run(move |conn| table.dump(conn)).await?;
    Ok(Json(dump))
}
