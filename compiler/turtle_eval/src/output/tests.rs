use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_sink_captures_lines() {
    let sink = BufferSink::new();
    sink.println("one");
    sink.println("two");
    assert_eq!(sink.output(), "one\ntwo\n");
    sink.clear();
    assert_eq!(sink.output(), "");
}

#[test]
fn non_capturing_sinks_report_nothing() {
    assert_eq!(silent_sink().output(), "");
    assert_eq!(stdout_sink().output(), "");
    assert_eq!(stderr_sink().output(), "");
    // Should not panic
    silent_sink().println("dropped");
    silent_sink().clear();
}

#[test]
fn shared_buffer_is_visible_through_clones() {
    let sink = buffer_sink();
    let writer = SharedOutput::clone(&sink);
    writer.println("hello");
    assert_eq!(sink.output(), "hello\n");
    sink.clear();
    assert_eq!(writer.output(), "");
}

#[test]
fn primitive_lines_use_fixed_width_fields() {
    assert_eq!(
        Primitive::Color {
            r: 1.0,
            g: 0.5,
            b: 0.0
        }
        .to_string(),
        "Color\t 1.0000  0.5000  0.0000"
    );
    assert_eq!(
        Primitive::LineTo { x: 0.0, y: -10.0 }.to_string(),
        "LineTo\t 0.0000 -10.0000"
    );
    assert_eq!(
        Primitive::MoveTo {
            x: 123.456_78,
            y: 2.0
        }
        .to_string(),
        "MoveTo\t123.4568  2.0000"
    );
}

#[test]
fn general_format_matches_printf_g() {
    let cases = [
        (0.0, "0"),
        (-0.0, "-0"),
        (3.0, "3"),
        (10.0, "10"),
        (0.5, "0.5"),
        (-2.25, "-2.25"),
        (1.0 / 3.0, "0.333333"),
        (std::f64::consts::PI, "3.14159"),
        (123_456.0, "123456"),
        (1_234_567.0, "1.23457e+06"),
        (999_999.5, "1e+06"),
        (1e20, "1e+20"),
        (0.0001, "0.0001"),
        (0.000_012_5, "1.25e-05"),
        (-1e-300, "-1e-300"),
        (f64::INFINITY, "inf"),
        (f64::NEG_INFINITY, "-inf"),
        (f64::NAN, "nan"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_general(value), expected, "formatting {value:e}");
    }
}
