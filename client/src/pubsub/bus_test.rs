use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Ping {
    A,
    B(u32),
}

fn recorder(bus: &EventBus<Ping>) -> (ListenerId, Rc<RefCell<Vec<Ping>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = bus.subscribe(move |e: &Ping| sink.borrow_mut().push(e.clone()));
    (id, seen)
}

#[test]
fn publish_reaches_every_listener_with_payload() {
    let bus = EventBus::new();
    let (_, first) = recorder(&bus);
    let (_, second) = recorder(&bus);
    bus.publish(&Ping::A);
    bus.publish(&Ping::B(9));
    assert_eq!(*first.borrow(), vec![Ping::A, Ping::B(9)]);
    assert_eq!(*second.borrow(), vec![Ping::A, Ping::B(9)]);
}

#[test]
fn listeners_run_in_registration_order() {
    let bus = EventBus::<Ping>::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for n in 0..3 {
        let order = order.clone();
        bus.subscribe(move |_: &Ping| order.borrow_mut().push(n));
    }
    bus.publish(&Ping::A);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn unsubscribe_stops_delivery_and_ignores_unknown_ids() {
    let bus = EventBus::new();
    let (id, seen) = recorder(&bus);
    bus.publish(&Ping::A);
    bus.unsubscribe(id);
    bus.unsubscribe(id);
    bus.publish(&Ping::B(1));
    assert_eq!(*seen.borrow(), vec![Ping::A]);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn ids_are_unique() {
    let bus = EventBus::<Ping>::new();
    let a = bus.subscribe(|_: &Ping| {});
    let b = bus.subscribe(|_: &Ping| {});
    assert_ne!(a, b);
}

#[test]
fn nested_publish_from_listener_is_delivered() {
    let bus = Rc::new(EventBus::new());
    let (_, seen) = recorder(&bus);
    let relay = bus.clone();
    bus.subscribe(move |e: &Ping| {
        if *e == Ping::A {
            relay.publish(&Ping::B(2));
        }
    });
    bus.publish(&Ping::A);
    assert_eq!(*seen.borrow(), vec![Ping::A, Ping::B(2)]);
}
