mod common;
use common::EventLog;
use pushstream::*;
use std::sync::{Arc, Mutex};

fn logging_handlers(log: &EventLog) -> Handlers<u32, String> {
    let (next_log, error_log, complete_log) = (log.clone(), log.clone(), log.clone());
    Handlers::new()
        .on_next(move |value: u32| next_log.push(format!("next {value}")))
        .on_error(move |error: String| error_log.push(format!("error {error}")))
        .on_complete(move || complete_log.push("complete"))
}

fn logging_teardown(log: &EventLog) -> Teardown {
    let log = log.clone();
    Teardown::new(move || log.push("teardown"))
}

#[test]
fn test_nothing_is_delivered_after_error() {
    let log = EventLog::new();
    let observable = {
        let log = log.clone();
        Observable::<u32, String>::new(move |observer| {
            observer.next(1);
            observer.error("broken pipe".to_string());
            observer.next(2);
            observer.complete();
            observer.error("again".to_string());
            logging_teardown(&log)
        })
    };

    observable.subscribe(logging_handlers(&log));
    assert_eq!(log.take(), ["next 1", "error broken pipe", "teardown"]);
}

#[test]
fn test_error_without_handler_still_tears_down() {
    let log = EventLog::new();
    let observed: Arc<Mutex<Option<Observer<u32, String>>>> = Arc::new(Mutex::new(None));
    let observable = {
        let log = log.clone();
        let observed = observed.clone();
        Observable::<u32, String>::new(move |observer| {
            *observed.lock().unwrap() = Some(observer.clone());
            observer.error("nobody listening".to_string());
            logging_teardown(&log)
        })
    };

    let subscription = observable.subscribe(Handlers::<u32, String>::new());
    let observer = observed.lock().unwrap().take().unwrap();
    assert!(observer.is_unsubscribed());
    assert_eq!(log.count("teardown"), 1);

    subscription.unsubscribe();
    assert_eq!(log.count("teardown"), 1);
}

#[test]
fn test_complete_twice_fires_once() {
    let log = EventLog::new();
    let observable = {
        let log = log.clone();
        Observable::<u32, String>::new(move |observer| {
            observer.complete();
            observer.complete();
            logging_teardown(&log)
        })
    };

    observable.subscribe(logging_handlers(&log));
    assert_eq!(log.take(), ["complete", "teardown"]);
}

#[test]
fn test_unsubscribe_before_emission_blocks_values() {
    let log = EventLog::new();
    let pending: Arc<Mutex<Vec<Observer<u32, String>>>> = Arc::new(Mutex::new(Vec::new()));
    // a producer that defers all of its emissions to whoever holds the observer
    let observable = {
        let log = log.clone();
        let pending = pending.clone();
        Observable::<u32, String>::new(move |observer| {
            pending.lock().unwrap().push(observer);
            logging_teardown(&log)
        })
    };

    let subscription = observable.subscribe(logging_handlers(&log));
    subscription.unsubscribe();
    assert_eq!(log.take(), ["teardown"]);

    let observer = pending.lock().unwrap().pop().unwrap();
    observer.next(1);
    observer.complete();
    assert_eq!(log.take(), [] as [&str; 0]);

    subscription.unsubscribe();
    assert_eq!(log.take(), [] as [&str; 0]);
}

#[test]
fn test_unsubscribe_from_next_handler() {
    let log = EventLog::new();
    let handle: Arc<Mutex<Option<Observer<u32, String>>>> = Arc::new(Mutex::new(None));

    let observable = {
        let log = log.clone();
        let handle = handle.clone();
        Observable::<u32, String>::new(move |observer| {
            *handle.lock().unwrap() = Some(observer.clone());
            for value in 1..=5 {
                observer.next(value);
            }
            observer.complete();
            logging_teardown(&log)
        })
    };

    let handlers = {
        let log = log.clone();
        let handle = handle.clone();
        Handlers::<u32, String>::new().on_next(move |value: u32| {
            log.push(format!("next {value}"));
            if value == 2 {
                let observer = handle.lock().unwrap().clone();
                if let Some(observer) = observer {
                    observer.unsubscribe();
                }
            }
        })
    };

    observable.subscribe(handlers);
    // the teardown wasn't attached yet when the consumer cancelled, so it runs once the producer returns
    assert_eq!(log.take(), ["next 1", "next 2", "teardown"]);
}

#[test]
fn test_teardown_may_unsubscribe_again() {
    let log = EventLog::new();
    let observable = {
        let log = log.clone();
        Observable::<u32, String>::new(move |observer| {
            let log = log.clone();
            let observer = observer.clone();
            Teardown::new(move || {
                log.push("teardown");
                observer.unsubscribe();
            })
        })
    };

    let subscription = observable.subscribe(Handlers::<u32, String>::new());
    subscription.unsubscribe();
    subscription.unsubscribe();
    assert_eq!(log.take(), ["teardown"]);
}

#[test]
fn test_handler_return_values_are_ignored() {
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let handlers = {
        let statuses = statuses.clone();
        Handlers::<u32, String>::new()
            .on_next(move |value: u32| {
                let status: u16 = if value % 2 == 0 { 200 } else { 404 };
                statuses.lock().unwrap().push(value);
                status
            })
            .on_error(|_: String| 500u16)
    };

    Observable::<u32, String>::from([1, 2, 3]).subscribe(handlers);
    // emission was never cut short by what the handler answered
    assert_eq!(*statuses.lock().unwrap(), vec![1, 2, 3]);
}
