//! Dispatch behavior: type isolation, ordering, and callable shapes.

use keyrelay::{Dispatcher, Handler};
use std::cell::{Cell, RefCell};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

mod common;
use common::{Counter, MessageA, MessageB};

#[test]
fn type_isolation() {
    let a_hits = Counter::new();
    let b_hits = Counter::new();

    let mut dispatcher = Dispatcher::new();
    let a_probe = a_hits.clone();
    dispatcher.register(move |_: &MessageA| a_probe.bump());
    let b_probe = b_hits.clone();
    dispatcher.register(move |_: &MessageB| b_probe.bump());

    dispatcher.dispatch(&MessageA(1));
    assert_eq!(a_hits.get(), 1);
    assert_eq!(b_hits.get(), 0, "handler for B must never see an A");
}

#[test]
fn registration_order_invocation() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new();
    for tag in 0..5u32 {
        let order = order.clone();
        dispatcher.register(move |_: &MessageA| order.borrow_mut().push(tag));
        // Interleaved registrations for an unrelated type must not disturb
        // the order of A's handlers.
        dispatcher.register(|_: &MessageB| {});
    }

    dispatcher.dispatch(&MessageA(0));
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn empty_dispatch_is_silent() {
    let dispatcher = Dispatcher::<keyrelay::RuntimeKeys>::new();
    dispatcher.dispatch(&MessageA(9));
    dispatcher.dispatch(&MessageB("quiet"));
}

thread_local! {
    static FN_ITEM_HITS: Cell<usize> = const { Cell::new(0) };
}

fn plain_function(_: &MessageA) {
    FN_ITEM_HITS.with(|hits| hits.set(hits.get() + 1));
}

struct StructHandler {
    hits: Counter,
}

impl Handler<MessageA> for StructHandler {
    fn on_message(&self, _message: &MessageA) {
        self.hits.bump();
    }
}

#[test]
fn mixed_shape_acceptance() {
    let closure_hits = Counter::new();
    let struct_hits = Counter::new();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(plain_function);
    let probe = closure_hits.clone();
    dispatcher.register(move |_: &MessageA| probe.bump());
    dispatcher.register(StructHandler {
        hits: struct_hits.clone(),
    });

    FN_ITEM_HITS.with(|hits| hits.set(0));
    dispatcher.dispatch(&MessageA(3));

    assert_eq!(FN_ITEM_HITS.with(Cell::get), 1);
    assert_eq!(closure_hits.get(), 1);
    assert_eq!(struct_hits.get(), 1);
}

#[test]
fn handlers_see_the_published_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new();
    let probe = seen.clone();
    dispatcher.register(move |m: &MessageB| probe.borrow_mut().push(m.0));

    dispatcher.dispatch(&MessageB("first"));
    dispatcher.dispatch(&MessageB("second"));
    assert_eq!(*seen.borrow(), vec!["first", "second"]);
}

// The concrete scenario from the contract: two types, three handlers,
// removal mid-sequence.
#[test]
fn two_type_counter_scenario() {
    let x = Counter::new();
    let y = Counter::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new();

    let (x1, o1) = (x.clone(), order.clone());
    let h1 = dispatcher.register(move |_: &MessageA| {
        x1.bump();
        o1.borrow_mut().push("h1");
    });
    let y2 = y.clone();
    let _h2 = dispatcher.register(move |_: &MessageB| y2.bump());
    let (x3, o3) = (x.clone(), order.clone());
    let _h3 = dispatcher.register(move |_: &MessageA| {
        x3.bump();
        o3.borrow_mut().push("h3");
    });

    dispatcher.dispatch(&MessageA(0));
    assert_eq!(x.get(), 2);
    assert_eq!(y.get(), 0);
    assert_eq!(*order.borrow(), vec!["h1", "h3"]);

    dispatcher.unregister(h1);
    dispatcher.dispatch(&MessageA(0));
    assert_eq!(x.get(), 3, "only h3 fired after h1 was removed");

    dispatcher.dispatch(&MessageB("b"));
    assert_eq!(y.get(), 1);
}

#[test]
fn panicking_handler_skips_its_siblings() {
    let later = Counter::new();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(|_: &MessageA| panic!("boom"));
    let probe = later.clone();
    dispatcher.register(move |_: &MessageA| probe.bump());

    let outcome = catch_unwind(AssertUnwindSafe(|| dispatcher.dispatch(&MessageA(0))));
    assert!(outcome.is_err());
    assert_eq!(later.get(), 0, "fail-fast: handlers after the panic do not run");

    // The table itself stays usable.
    dispatcher.unregister(keyrelay::Handle::default());
    let _ = catch_unwind(AssertUnwindSafe(|| dispatcher.dispatch(&MessageA(0))));
}
