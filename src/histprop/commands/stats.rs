use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{InfoField, Property};
use crate::session::Session;
use crate::vocab::{tally_field, tally_streets, Tally};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub total: usize,
    pub streets: Vec<Tally>,
    pub styles: Vec<Tally>,
    pub construction_dates: Vec<Tally>,
    pub conditions: Vec<Tally>,
    pub with_images: usize,
    pub with_architectural_description: usize,
    pub with_historical_narrative: usize,
}

impl StatsReport {
    pub fn compute(properties: &[Property]) -> Self {
        let count = |pred: &dyn Fn(&Property) -> bool| properties.iter().filter(|&p| pred(p)).count();
        Self {
            total: properties.len(),
            streets: tally_streets(properties),
            styles: tally_field(properties, InfoField::StyleForm),
            construction_dates: tally_field(properties, InfoField::ConstructionDate),
            conditions: tally_field(properties, InfoField::Condition),
            with_images: count(&|p| !p.images.is_empty()),
            with_architectural_description: count(&|p| !p.architectural_description.is_empty()),
            with_historical_narrative: count(&|p| !p.historical_narrative.is_empty()),
        }
    }
}

pub fn run(session: &Session) -> Result<CmdResult> {
    let report = StatsReport::compute(session.all());
    Ok(CmdResult::default()
        .with_total(report.total)
        .with_stats(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{sample_property, SourceFixture};

    fn values(tallies: &[Tally]) -> Vec<(&str, usize)> {
        tallies.iter().map(|t| (t.value.as_str(), t.count)).collect()
    }

    #[test]
    fn tallies_most_common_first() {
        let properties = SourceFixture::new()
            .with_surveyed("A_1", "1 High Street", "Fair", "1850")
            .with_surveyed("B_2", "2 Main St", "Good", "1850")
            .with_surveyed("C_3", "3 High Street", "Good", "1900")
            .with_surveyed("D_4", "4 Elm Street", "Good", "1850")
            .properties;
        let report = StatsReport::compute(&properties);

        assert_eq!(report.total, 4);
        // "Street" appears for every "<n> <name> Street" address
        assert_eq!(values(&report.streets), vec![("Street", 3), ("St", 1)]);
        assert_eq!(values(&report.conditions), vec![("Good", 3), ("Fair", 1)]);
        assert_eq!(
            values(&report.construction_dates),
            vec![("1850", 3), ("1900", 1)]
        );
        assert!(report.styles.is_empty());
    }

    #[test]
    fn ties_keep_first_appearance() {
        let properties = SourceFixture::new()
            .with_styled("A_1", "1 A St", "Federal")
            .with_styled("B_2", "2 B St", "Colonial")
            .properties;
        let report = StatsReport::compute(&properties);
        assert_eq!(values(&report.styles), vec![("Federal", 1), ("Colonial", 1)]);
    }

    #[test]
    fn short_addresses_do_not_count_as_streets() {
        let properties = SourceFixture::new()
            .with_address("A_1", "Elm Street")
            .with_unaddressed("B_2")
            .properties;
        let report = StatsReport::compute(&properties);
        assert!(report.streets.is_empty());
    }

    #[test]
    fn coverage_counts() {
        let mut narrated = sample_property("N_1", "1 North St");
        narrated.historical_narrative = "Built for a sea captain.".into();
        narrated.architectural_description = "Two and a half stories.".into();
        let properties = SourceFixture::new()
            .with_photographed("P_1", "1 Photo St", 2)
            .with_property(narrated)
            .with_unaddressed("U_1")
            .properties;

        let report = StatsReport::compute(&properties);
        assert_eq!(report.with_images, 1);
        assert_eq!(report.with_architectural_description, 1);
        assert_eq!(report.with_historical_narrative, 1);
    }

    #[test]
    fn run_uses_full_collection_regardless_of_filters() {
        let mut session = Session::with_properties(SourceFixture::elm_and_oak().properties);
        session.apply(crate::model::SearchFilters::new().with_style("colonial".to_string()));
        let result = run(&session).unwrap();
        assert_eq!(result.stats.unwrap().total, 2);
    }
}
