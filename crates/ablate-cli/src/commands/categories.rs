use ablate_core::CategoryCatalog;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let catalog = CategoryCatalog::new();

    println!("Category sets:");
    for set in catalog.all() {
        let labels: Vec<_> = set.labels().iter().map(str::to_string).collect();
        println!("  {}", set.name());
        println!("    Labels: {}", labels.join(", "));
        println!("    Field: {}", set.field_name());
    }

    Ok(())
}
