use foundation::{Event, Op, Sink, Stopwatch, TracingSink};

/// O(1): look at the first name only, however long the list is.
pub fn check_first<S: AsRef<str>>(names: &[S]) {
    check_first_with(names, TracingSink)
}

pub fn check_first_with<S: AsRef<str>>(names: &[S], mut sink: impl Sink) {
    let watch = Stopwatch::start();
    let first = names.first().map(AsRef::as_ref);
    sink.record(&Event::Peek {
        op: Op::CheckFirst,
        first,
        elapsed: watch.elapsed(),
    });
}

/// O(n): visit every name once, in order.
pub fn print_names<S: AsRef<str>>(names: &[S]) {
    print_names_with(names, TracingSink)
}

pub fn print_names_with<S: AsRef<str>>(names: &[S], mut sink: impl Sink) {
    let watch = Stopwatch::start();
    for (index, name) in names.iter().enumerate() {
        sink.record(&Event::Visit {
            op: Op::PrintNames,
            index,
            name: name.as_ref(),
            elapsed: watch.elapsed(),
        });
    }
}

/// O(n^2): for every name, visit every name again. Outer index major.
pub fn print_names_twice<S: AsRef<str>>(names: &[S]) {
    print_names_twice_with(names, TracingSink)
}

pub fn print_names_twice_with<S: AsRef<str>>(names: &[S], mut sink: impl Sink) {
    let watch = Stopwatch::start();
    for (outer, name) in names.iter().enumerate() {
        for (inner, other) in names.iter().enumerate() {
            sink.record(&Event::VisitPair {
                op: Op::PrintNamesTwice,
                outer,
                inner,
                name: name.as_ref(),
                other: other.as_ref(),
                elapsed: watch.elapsed(),
            });
        }
    }
}
