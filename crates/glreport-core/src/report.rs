//! The enrich/filter/join pipeline producing the transaction detail report
//!
//! Data flows one direction: the resolved bounds are applied independently
//! to the chart-of-accounts master and the transaction history, then the
//! surviving history lines are inner-joined to their chart rows and the
//! result is sorted into report order. The whole transform is deterministic;
//! re-running with identical inputs produces identical output.

use std::collections::HashMap;

use glreport_params::{FilterParameters, ResolvedBounds};

use super::models::{AccountKey, ChartAccount, EnrichedRow, HistoryLine};
use super::types::{account_type_leading_char, cost_center_name, department_name, AccountTypeCategory};

/// A chart row that survived the filters, with its derived display fields
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedAccount {
    /// The underlying chart row
    pub account: ChartAccount,
    /// Formatted account number
    pub account_number: String,
    /// Category derived from account_type
    pub category: AccountTypeCategory,
    /// Cost center name derived from acct_1
    pub cost_center_name: String,
    /// Department name derived from acct_2
    pub department_name: String,
}

/// Filter the chart-of-accounts rows and compute their display fields.
///
/// The fiscal-key range does not apply here: chart rows key by fiscal_year
/// only, not period. A row with a blank or absent account_type never matches
/// a specified account-type selector.
pub fn enrich_chart(
    chart: &[ChartAccount],
    bounds: &ResolvedBounds,
) -> HashMap<AccountKey, EnrichedAccount> {
    let enriched: HashMap<AccountKey, EnrichedAccount> = chart
        .iter()
        .filter(|account| bounds.matches_segments(account.key().segments()))
        .filter(|account| match bounds.acct_type {
            Some(selector) => {
                account_type_leading_char(account.account_type.as_deref()) == Some(selector)
            }
            None => true,
        })
        .map(|account| {
            let key = account.key();
            (
                key,
                EnrichedAccount {
                    account_number: key.account_number(),
                    category: account.category(),
                    cost_center_name: cost_center_name(account.acct_1).to_string(),
                    department_name: department_name(account.acct_2).to_string(),
                    account: account.clone(),
                },
            )
        })
        .collect();

    log::debug!("chart enricher kept {} of {} rows", enriched.len(), chart.len());
    enriched
}

/// Filter the history lines by fiscal-key range and segment bounds.
///
/// The account-type selector does not apply here; history lines carry no
/// account_type of their own.
pub fn filter_history<'a>(
    history: &'a [HistoryLine],
    bounds: &ResolvedBounds,
) -> Vec<&'a HistoryLine> {
    let filtered: Vec<&HistoryLine> = history
        .iter()
        .filter(|line| bounds.contains_fiscal_key(line.fiscal_key()))
        .filter(|line| bounds.matches_segments(line.key().segments()))
        .collect();

    log::debug!("history filter kept {} of {} lines", filtered.len(), history.len());
    filtered
}

/// Run the full report: normalize the parameters, filter both relations,
/// inner-join on the account key tuple, project and sort.
///
/// A history line appears in the output only if a chart row with the same
/// (fiscal_year, acct_1..acct_4) survived the chart filters; unmatched lines
/// are dropped. Output order is cost center name, department name, account
/// number, fiscal year, fiscal period, then gl_history_id as the final
/// deterministic tie-break.
pub fn transaction_detail_report(
    chart: &[ChartAccount],
    history: &[HistoryLine],
    params: &FilterParameters,
) -> Vec<EnrichedRow> {
    let bounds = params.resolve();
    let accounts = enrich_chart(chart, &bounds);
    let lines = filter_history(history, &bounds);

    let mut pairs: Vec<(&HistoryLine, &EnrichedAccount)> = lines
        .into_iter()
        .filter_map(|line| accounts.get(&line.key()).map(|account| (line, account)))
        .collect();

    pairs.sort_by(|a, b| {
        let key_a = (
            &a.1.cost_center_name,
            &a.1.department_name,
            &a.1.account_number,
            a.0.fiscal_year,
            a.0.fiscal_period,
            a.0.gl_history_id,
        );
        let key_b = (
            &b.1.cost_center_name,
            &b.1.department_name,
            &b.1.account_number,
            b.0.fiscal_year,
            b.0.fiscal_period,
            b.0.gl_history_id,
        );
        key_a.cmp(&key_b)
    });

    log::debug!("joined {} report rows", pairs.len());
    pairs
        .into_iter()
        .map(|(line, enriched)| project_row(line, enriched))
        .collect()
}

/// Project one joined (history line, enriched chart row) pair into an
/// output row
fn project_row(line: &HistoryLine, enriched: &EnrichedAccount) -> EnrichedRow {
    EnrichedRow {
        account_number: enriched.account_number.clone(),
        fiscal_year: line.fiscal_year,
        fiscal_period: line.fiscal_period,
        cost_center_name: enriched.cost_center_name.clone(),
        department_name: enriched.department_name.clone(),
        alfre: enriched.account.alfre.clone(),
        account_type: enriched.account.account_type.clone(),
        account_type_category: enriched.category,
        account_description: enriched.account.description.clone(),
        budget: enriched.account.budget,
        encumbered_amt: enriched.account.encumbered_amt,
        dr_amount: line.dr_amount,
        cr_amount: line.cr_amount,
        transaction_description: line.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn chart_row(
        fiscal_year: i32,
        segments: [i64; 4],
        account_type: Option<&str>,
        description: &str,
    ) -> ChartAccount {
        ChartAccount {
            fiscal_year,
            acct_1: segments[0],
            acct_2: segments[1],
            acct_3: segments[2],
            acct_4: segments[3],
            alfre: "E".to_string(),
            account_type: account_type.map(str::to_string),
            description: description.to_string(),
            budget: dec!(1000),
            encumbered_amt: dec!(0),
        }
    }

    fn history_row(
        id: i64,
        fiscal_year: i32,
        fiscal_period: i32,
        segments: [i64; 4],
        dr: rust_decimal::Decimal,
        description: &str,
    ) -> HistoryLine {
        HistoryLine {
            gl_history_id: id,
            fiscal_year,
            fiscal_period,
            acct_1: segments[0],
            acct_2: segments[1],
            acct_3: segments[2],
            acct_4: segments[3],
            dr_amount: dr,
            cr_amount: dec!(0),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_no_filters_is_full_inner_join() {
        let chart = vec![
            chart_row(2026, [1, 5, 100, 200], Some("Expense-Op"), "Travel"),
            chart_row(2026, [2, 1, 300, 400], Some("Revenue"), "Fees"),
        ];
        let history = vec![
            history_row(1, 2026, 1, [1, 5, 100, 200], dec!(10), "a"),
            history_row(2, 2026, 2, [2, 1, 300, 400], dec!(20), "b"),
            // No chart row for this key tuple
            history_row(3, 2026, 3, [9, 9, 900, 900], dec!(30), "c"),
        ];

        let rows = transaction_detail_report(&chart, &history, &FilterParameters::default());

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.transaction_description != "c"));
    }

    #[test]
    fn test_unmatched_history_dropped_regardless_of_filters() {
        let chart = vec![chart_row(2025, [1, 5, 100, 200], Some("E"), "Travel")];
        // Same segments, different fiscal year: key tuple does not match
        let history = vec![history_row(1, 2026, 1, [1, 5, 100, 200], dec!(10), "x")];

        let rows = transaction_detail_report(&chart, &history, &FilterParameters::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_fiscal_range_crosses_year_boundary() {
        let chart = vec![
            chart_row(2025, [1, 5, 100, 200], Some("E"), "Travel"),
            chart_row(2026, [1, 5, 100, 200], Some("E"), "Travel"),
        ];
        let history = vec![
            history_row(1, 2025, 2, [1, 5, 100, 200], dec!(1), "too early"),
            history_row(2, 2025, 12, [1, 5, 100, 200], dec!(2), "in range"),
            history_row(3, 2026, 2, [1, 5, 100, 200], dec!(3), "in range end"),
            history_row(4, 2026, 3, [1, 5, 100, 200], dec!(4), "too late"),
        ];
        let params = FilterParameters {
            beg_fiscal_year: Some(2025),
            beg_fiscal_period: Some(3),
            end_fiscal_year: Some(2026),
            end_fiscal_period: Some(2),
            ..Default::default()
        };

        let rows = transaction_detail_report(&chart, &history, &params);
        let descriptions: Vec<&str> = rows
            .iter()
            .map(|r| r.transaction_description.as_str())
            .collect();

        assert_eq!(descriptions, vec!["in range", "in range end"]);
    }

    #[test]
    fn test_acct_type_selector_excludes_blank_account_types() {
        let chart = vec![
            chart_row(2026, [1, 5, 100, 200], Some("Expense-Op"), "Travel"),
            chart_row(2026, [1, 5, 100, 201], Some("Revenue"), "Fees"),
            chart_row(2026, [1, 5, 100, 202], None, "No type"),
            chart_row(2026, [1, 5, 100, 203], Some("   "), "Blank type"),
        ];
        let params = FilterParameters {
            acct_type: Some("E".to_string()),
            ..Default::default()
        };
        let bounds = params.resolve();

        let accounts = enrich_chart(&chart, &bounds);
        assert_eq!(accounts.len(), 1);
        let only = accounts.values().next().unwrap();
        assert_eq!(only.account.description, "Travel");
        assert_eq!(only.category, AccountTypeCategory::Expense);
    }

    #[test]
    fn test_segment_range_filtering() {
        let chart = vec![
            chart_row(2026, [1, 5, 100, 200], Some("E"), "in"),
            chart_row(2026, [1, 5, 250, 200], Some("E"), "out"),
        ];
        let params = FilterParameters {
            beg_acct_3: Some(50),
            end_acct_3: Some(150),
            ..Default::default()
        };
        let bounds = params.resolve();

        let accounts = enrich_chart(&chart, &bounds);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts.values().next().unwrap().account.description, "in");
    }

    #[test]
    fn test_history_filter_applies_selectors() {
        let history = vec![
            history_row(1, 2026, 1, [1, 5, 100, 200], dec!(1), "keep"),
            history_row(2, 2026, 1, [2, 5, 100, 200], dec!(2), "wrong cost center"),
            history_row(3, 2026, 1, [1, 4, 100, 200], dec!(3), "wrong department"),
        ];
        let params = FilterParameters {
            cost_center: Some("01".to_string()),
            department: Some("05".to_string()),
            ..Default::default()
        };
        let bounds = params.resolve();

        let filtered = filter_history(&history, &bounds);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "keep");
    }

    #[test]
    fn test_output_ordering_and_tie_breaks() {
        let chart = vec![
            chart_row(2026, [1, 5, 100, 200], Some("E"), "mw"),
            chart_row(2026, [2, 5, 100, 200], Some("E"), "ms"),
            chart_row(2025, [1, 5, 100, 200], Some("E"), "mw-prior"),
        ];
        let history = vec![
            history_row(9, 2026, 1, [1, 5, 100, 200], dec!(1), "mw p1 id9"),
            history_row(3, 2026, 1, [1, 5, 100, 200], dec!(1), "mw p1 id3"),
            history_row(4, 2026, 2, [1, 5, 100, 200], dec!(1), "mw p2"),
            history_row(5, 2025, 9, [1, 5, 100, 200], dec!(1), "mw fy2025"),
            history_row(1, 2026, 1, [2, 5, 100, 200], dec!(1), "ms"),
        ];

        let rows = transaction_detail_report(&chart, &history, &FilterParameters::default());
        let descriptions: Vec<&str> = rows
            .iter()
            .map(|r| r.transaction_description.as_str())
            .collect();

        // "MS - Marina Sewer" sorts before "MW - Marina Water"; within the
        // same account, smaller fiscal_year first, then period, then id.
        assert_eq!(
            descriptions,
            vec!["ms", "mw fy2025", "mw p1 id3", "mw p1 id9", "mw p2"]
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        let chart = vec![ChartAccount {
            fiscal_year: 2026,
            acct_1: 1,
            acct_2: 5,
            acct_3: 100,
            acct_4: 200,
            alfre: "E".to_string(),
            account_type: Some("E-Op".to_string()),
            description: "Travel".to_string(),
            budget: dec!(1000),
            encumbered_amt: dec!(0),
        }];
        let history = vec![history_row(7, 2026, 3, [1, 5, 100, 200], dec!(50), "Flight")];
        let params = FilterParameters {
            cost_center: Some("01".to_string()),
            department: Some("05".to_string()),
            acct_type: Some("E".to_string()),
            ..Default::default()
        };

        let rows = transaction_detail_report(&chart, &history, &params);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.account_number, "01-05-100-200");
        assert_eq!(row.cost_center_name, "MW - Marina Water");
        assert_eq!(row.department_name, "Engineering");
        assert_eq!(row.account_type_category, AccountTypeCategory::Expense);
        assert_eq!(row.account_description, "Travel");
        assert_eq!(row.budget, dec!(1000));
        assert_eq!(row.dr_amount, dec!(50));
        assert_eq!(row.cr_amount, dec!(0));
        assert_eq!(row.transaction_description, "Flight");
        assert_eq!(row.fiscal_year, 2026);
        assert_eq!(row.fiscal_period, 3);
    }

    #[test]
    fn test_identical_inputs_produce_identical_output() {
        let chart = vec![
            chart_row(2026, [1, 5, 100, 200], Some("E"), "a"),
            chart_row(2026, [3, 2, 110, 210], Some("R"), "b"),
        ];
        let history = vec![
            history_row(2, 2026, 1, [3, 2, 110, 210], dec!(2), "y"),
            history_row(1, 2026, 1, [1, 5, 100, 200], dec!(1), "x"),
        ];
        let params = FilterParameters::default();

        let first = transaction_detail_report(&chart, &history, &params);
        let second = transaction_detail_report(&chart, &history, &params);
        assert_eq!(first, second);
    }
}
