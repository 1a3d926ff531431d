use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;

#[derive(Debug)]
struct Declined;

impl std::fmt::Display for Declined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("card declined")
    }
}

#[test]
fn set_loading_toggles_flag() {
    Owner::new().with(|| {
        let loading = LoadingHandle::new(LoadingConfig::default());
        assert!(!loading.is_loading("checkout"));
        loading.set_loading("checkout", true);
        assert!(loading.is_loading("checkout"));
        assert!(!loading.is_loading("subscribe"));
        loading.set_loading("checkout", false);
        assert!(!loading.is_loading("checkout"));
    });
}

#[test]
fn with_loading_returns_value_and_releases() {
    Owner::new().with(|| {
        let loading = LoadingHandle::new(LoadingConfig::default());
        let value = block_on(loading.with_loading("checkout", async { Ok::<_, Declined>(42) }));
        assert_eq!(value, Some(42));
        assert!(!loading.is_loading("checkout"));
    });
}

#[test]
fn with_loading_swallows_failure() {
    Owner::new().with(|| {
        let loading = LoadingHandle::new(LoadingConfig::default());
        let value = block_on(loading.with_loading("checkout", async { Err::<u8, _>(Declined) }));
        assert_eq!(value, None);
        assert!(!loading.is_loading("checkout"));
    });
}

#[test]
fn flag_is_set_while_action_runs() {
    Owner::new().with(|| {
        let loading = LoadingHandle::new(LoadingConfig::default());
        let observed = block_on(loading.with_loading("subscribe", async {
            Ok::<_, Declined>(loading.is_loading("subscribe"))
        }));
        assert_eq!(observed, Some(true));
    });
}

#[test]
fn earlier_run_settling_keeps_newer_run_loading() {
    use futures::channel::oneshot;

    Owner::new().with(|| {
        let loading = LoadingHandle::new(LoadingConfig::default());
        block_on(async {
            let (tx_first, rx_first) = oneshot::channel::<()>();
            let (tx_second, rx_second) = oneshot::channel::<()>();
            let first = loading.with_loading("order", async { rx_first.await });
            let second = loading.with_loading("order", async { rx_second.await });
            futures::pin_mut!(first, second);

            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(futures::poll!(second.as_mut()).is_pending());

            tx_first.send(()).unwrap();
            assert_eq!(first.await, Some(()));
            assert!(loading.is_loading("order"));

            tx_second.send(()).unwrap();
            assert_eq!(second.await, Some(()));
            assert!(!loading.is_loading("order"));
        });
    });
}
