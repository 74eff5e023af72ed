use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_codes_are_distinct_and_nonzero() {
    let errors = [
        EvalError::OutOfMemory(SymbolError::Full(0)),
        EvalError::UnknownNode {
            expected: "command",
            found: "value",
        },
        EvalError::UnknownVariable { name: "x".into() },
        EvalError::NonFinite {
            op: '/',
            lhs: 1.0,
            rhs: 0.0,
            result: f64::INFINITY,
        },
        EvalError::UnorderedRandom { low: 2.0, high: 1.0 },
        EvalError::SqrtDomain { arg: -1.0 },
        EvalError::ColorChannel {
            channel: Channel::Red,
        },
        EvalError::RepeatLimit {
            count: 1e20,
            limit: 10,
        },
        EvalError::UnknownProcedure { name: "p".into() },
        EvalError::VariableAlloc {
            name: "x".into(),
            source: SymbolError::Full(0),
        },
        EvalError::NestedProcedure { name: "p".into() },
        EvalError::ProcedureAlloc {
            name: "p".into(),
            source: SymbolError::Full(0),
        },
        EvalError::RecursionLimit { limit: 8 },
        EvalError::ProcedureExists { name: "p".into() },
    ];
    let codes: Vec<i32> = errors.iter().map(EvalError::code).collect();
    assert_eq!(codes, (1..=14).collect::<Vec<_>>());
    assert_eq!(EvalError::MalformedProgram.code(), 2);
}

#[test]
fn test_messages() {
    assert_eq!(
        EvalError::UnknownVariable { name: "size".into() }.to_string(),
        "Unknown variable 'size'."
    );
    assert_eq!(
        EvalError::UnorderedRandom { low: 3.0, high: 1.5 }.to_string(),
        "Function random(3.0, 1.5) failed the 'ordered arguments' check."
    );
    assert_eq!(
        EvalError::NonFinite {
            op: '/',
            lhs: 1.0,
            rhs: 0.0,
            result: f64::INFINITY,
        }
        .to_string(),
        "Operator '/' failed because 1/0 = inf isn't finite."
    );
    assert!(EvalError::ColorChannel {
        channel: Channel::Green
    }
    .to_string()
    .contains("on channel GREEN."));
}
