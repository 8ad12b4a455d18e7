#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt;
    use std::sync::Arc;

    use crate::tests::RecordingSink;
    use crate::{ln_d, ln_e, ln_i, ln_v, ln_w, ln_wtf, Ln, Priority};

    #[derive(Debug)]
    struct StateError;

    impl fmt::Display for StateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("illegal state")
        }
    }

    impl std::error::Error for StateError {}

    fn setup() -> (Ln, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (Ln::new(sink.clone()), sink)
    }

    #[test]
    fn arguments_are_not_evaluated_below_threshold() {
        let (ln, sink) = setup();
        ln.set_log_level(Priority::Warn);
        let evaluated = Cell::new(0);
        let count = || {
            evaluated.set(evaluated.get() + 1);
            evaluated.get()
        };

        ln_v!(ln, "{}", count());
        ln_d!(ln, "{}", count());
        ln_i!(ln, err = &StateError; "{}", count());
        assert_eq!(evaluated.get(), 0);
        assert!(sink.records().is_empty());

        ln_w!(ln, "call {}", count());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(sink.messages(), vec!["call 1".to_string()]);
    }

    #[test]
    fn error_shapes() {
        let (ln, sink) = setup();

        ln_e!(ln, err = &StateError);
        ln_wtf!(ln, err = &StateError; "UH-OH! {}", "again");

        let records = sink.records();
        assert_eq!(records[0].priority, Priority::Error);
        assert_eq!(records[0].message, "\nillegal state");
        assert_eq!(records[1].priority, Priority::Assert);
        assert_eq!(records[1].message, "UH-OH! again\nillegal state");
    }

    #[test]
    fn macros_tag_their_own_call_site() {
        let (ln, sink) = setup();
        let by_ref = &ln;

        let line = line!();
        ln_i!(by_ref, "user click at {}, {}", 10, 20);

        let records = sink.records();
        assert_eq!(records[0].message, "user click at 10, 20");
        assert_eq!(records[0].tag, format!("macros.rs:{}", line + 1));
    }
}
