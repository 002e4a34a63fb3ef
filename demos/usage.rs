//! Host-side walkthrough of the façade.
//!
//! Registers a stderr sink and a printing escalation, then exercises the
//! macro surface. Run with `cargo run --example usage`.

use std::io::Write as _;

use roslog::{
    ComponentId, DebugSink, Escalation, OutputLevel, Status, TraceLevel, TracingFlags, ros_assert,
    ros_log_error, ros_log_information, ros_log_trace, ros_log_warning, ros_trace_events,
    set_debug_sink, set_escalation,
};
use widestring::u16str;

struct StderrSink;

impl DebugSink for StderrSink {
    fn write(&self, _component: ComponentId, _level: OutputLevel, bytes: &[u8]) {
        let _ = std::io::stderr().write_all(bytes);
    }
}

struct PrintingEscalation;

impl Escalation for PrintingEscalation {
    fn debug_break(&self, level: TraceLevel) -> Status {
        eprintln!("(debug break requested at level {})", level.value());

        Status::SUCCESS
    }

    fn bugcheck(&self, level: TraceLevel) -> Status {
        eprintln!("(bugcheck requested at level {})", level.value());

        Status::SUCCESS
    }
}

static SINK: StderrSink = StderrSink;
static ESCALATION: PrintingEscalation = PrintingEscalation;

fn main() {
    roslog::init_tracing();

    set_debug_sink(&SINK).expect("first registration");
    set_escalation(&ESCALATION).expect("first registration");

    ros_log_information!("adapter starting, pid {}", std::process::id());
    ros_log_trace!("entering demo");
    ros_log_warning!("running outside kernel mode");
    ros_log_error!(u16str!("wide message from a UTF-16 buffer"));
    ros_trace_events!(TraceLevel::Verbose, TracingFlags::PRESENT, "frame {}", 1);

    ros_assert!(1 + 1 == 2);
    ros_assert!("demo".len() == 3);

    roslog::cleanup_tracing();
}
