mod config;

use anyhow::{Context, Result};

use wedplan_weddings::{EventStore, JsonFileStorage, Wedding};

use crate::config::Settings;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    wedplan_observability::init_with(&settings.log_filter, settings.log_format);

    let storage = JsonFileStorage::new(&settings.data_file);
    let store = match storage
        .read()
        .with_context(|| format!("failed to load {}", storage.path().display()))?
    {
        Some(store) => store,
        None => {
            tracing::info!("starting with an empty event store");
            let store = EventStore::new();
            storage
                .save(&store)
                .with_context(|| format!("failed to create {}", storage.path().display()))?;
            store
        }
    };

    tracing::info!(weddings = store.len(), "event store ready");
    for wedding in store.weddings() {
        println!("{}", summarize(wedding));
    }
    Ok(())
}

/// One-line overview of a wedding.
fn summarize(wedding: &Wedding) -> String {
    let rsvp = wedding.rsvp_summary();
    let seated = wedding.guests().len() - wedding.unseated_guests().len();
    format!(
        "{}: {} guests ({} seated), {} tables; rsvp yes {} / no {} / pending {}",
        wedding.name(),
        rsvp.total(),
        seated,
        wedding.tables().len(),
        rsvp.yes,
        rsvp.no,
        rsvp.no_response
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wedplan_weddings::WeddingName;

    #[test]
    fn summary_of_empty_wedding() {
        let wedding = Wedding::new(WeddingName::new("Tan and Lim").unwrap());
        assert_eq!(
            summarize(&wedding),
            "Tan and Lim: 0 guests (0 seated), 0 tables; rsvp yes 0 / no 0 / pending 0"
        );
    }
}
