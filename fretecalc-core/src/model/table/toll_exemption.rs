use super::State;

/// origin states whose regulation removes toll values from the ICMS tax
/// base. currently only Paraná (Decreto Estadual 7.871/2017, Anexo I).
/// membership is table-driven so further states are a data change, not a
/// calculation change.
static TOLL_ICMS_EXEMPT_ORIGINS: &[State] = &[State::PR];

/// true when shipments originating in `state` exclude tolls from the
/// ICMS base. tolls remain part of the total landed value either way.
pub fn is_toll_exempt_from_icms(state: State) -> bool {
    TOLL_ICMS_EXEMPT_ORIGINS.contains(&state)
}

/// string-code convenience for callers holding raw form input. unknown
/// codes are not exempt.
pub fn toll_exempt_origin_code(code: &str) -> bool {
    State::from_code(code).is_some_and(is_toll_exempt_from_icms)
}
