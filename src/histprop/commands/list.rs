use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::SearchFilters;
use crate::session::Session;

pub fn run(session: &mut Session, filters: SearchFilters) -> Result<CmdResult> {
    session.apply(filters);
    let listed = session.visible().into_iter().cloned().collect();
    Ok(CmdResult::default()
        .with_listed(listed)
        .with_total(session.total()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    fn session() -> Session {
        Session::with_properties(
            SourceFixture::elm_and_oak()
                .with_unaddressed("Unknown_1")
                .properties,
        )
    }

    #[test]
    fn lists_everything_without_filters() {
        let mut session = session();
        let result = run(&mut session, SearchFilters::default()).unwrap();
        assert_eq!(result.listed.len(), 3);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn lists_matching_subset_with_total() {
        let mut session = session();
        let filters = SearchFilters::new().with_street("oak".to_string());
        let result = run(&mut session, filters).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].filename, "Oak_45");
        assert_eq!(result.total, 3);
    }

    #[test]
    fn successive_runs_start_from_the_full_collection() {
        let mut session = session();
        run(&mut session, SearchFilters::new().with_style("colonial".to_string())).unwrap();
        let result = run(&mut session, SearchFilters::new().with_style("victorian".to_string()))
            .unwrap();
        assert_eq!(result.listed[0].filename, "Oak_45");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let mut session = session();
        let filters = SearchFilters::new().with_condition("ruinous".to_string());
        let result = run(&mut session, filters).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages.is_empty());
    }
}
