// roster-client/examples/admin_session.rs
// Browse the first page of employees and print the statistics snapshot.
//
// Run against a local API server:
//   cargo run --example admin_session -- http://localhost:5000/api

use std::sync::Arc;

use roster_client::{ClientConfig, RecordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000/api".to_string());

    let client = ClientConfig::new(base_url).with_timeout(10).build_client();
    let store = Arc::new(RecordStore::new(Arc::new(client)));

    let page = store.fetch_page(1).await?;
    println!(
        "page {}/{} - {} employees",
        page.current_page,
        page.total_pages,
        page.items.len()
    );
    for employee in &page.items {
        let state = if employee.status { "active" } else { "inactive" };
        println!("  #{} {} <{}> [{}]", employee.id, employee.name, employee.email, state);
    }

    let stats = store.fetch_stats().await?;
    for entry in &stats.highest_salaries {
        println!("{}: top salary {:.2}", entry.department, entry.max_salary);
    }
    for entry in &stats.youngest {
        println!("{}: youngest is {} ({})", entry.department, entry.employee_name, entry.age);
    }

    Ok(())
}
