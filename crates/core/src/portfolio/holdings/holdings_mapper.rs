use folioview_holdings_api::HoldingRecord;

use super::holdings_model::Holding;

/// Convert one wire record into a domain holding.
pub fn map_to_domain(record: Option<&HoldingRecord>) -> Option<Holding> {
    record.map(|r| Holding {
        symbol: r.symbol.clone(),
        quantity: r.quantity,
        ltp: r.ltp,
        avg_price: r.avg_price,
        close: r.close,
    })
}

/// Convert a list of wire records, dropping null entries.
///
/// Returns `None` when the list itself is absent or nothing survives the
/// filter.
pub fn map_to_domain_list(records: Option<&[Option<HoldingRecord>]>) -> Option<Vec<Holding>> {
    let holdings: Vec<Holding> = records?
        .iter()
        .filter_map(|record| map_to_domain(record.as_ref()))
        .collect();

    if holdings.is_empty() {
        None
    } else {
        Some(holdings)
    }
}
