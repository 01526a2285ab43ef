//! Memoization and invalidation behavior

use crate::helpers::EngineFixture;
use magicscript::{ApiMethod, ChainResolver, Module};

fn orders_module(return_type: &str) -> Module {
    Module::new("orders", "order store", "test")
        .with_methods(vec![ApiMethod::new("fetch", return_type, "fetch orders")])
}

#[test]
fn simple_and_chain_caches_fill_independently() {
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();

    inferencer.infer_type("db.select('x')");
    assert_eq!(fx.caches.get_simple("db.select('x')").as_deref(), Some("Array"));
    assert_eq!(fx.caches.get_chain("db.select('x')"), None);

    let resolver = ChainResolver::new(&inferencer);
    resolver.resolve_type("db.select('x').size()");
    assert_eq!(
        fx.caches.get_chain("db.select('x').size()").as_deref(),
        Some("Integer")
    );
    assert_eq!(fx.caches.get_simple("db.select('x').size()"), None);
}

#[test]
fn cached_answers_survive_registry_changes_until_cleared() {
    let fx = EngineFixture::bare();
    fx.registry.register_module(orders_module("Array"));

    let inferencer = fx.inferencer();
    assert_eq!(inferencer.infer_type("orders.fetch()"), "Array");

    // Re-registering with a different return type does not touch the
    // cache; invalidation is the host's responsibility
    fx.registry.register_module(orders_module("PageResult"));
    assert_eq!(inferencer.infer_type("orders.fetch()"), "Array");

    fx.caches.clear();
    assert_eq!(inferencer.infer_type("orders.fetch()"), "PageResult");
}

#[test]
fn clear_wipes_both_caches() {
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();
    let resolver = ChainResolver::new(&inferencer);

    inferencer.infer_type("42");
    resolver.resolve_type("db.page('x')");
    assert!(!fx.caches.is_empty());

    fx.caches.clear();
    assert!(fx.caches.is_empty());
    assert_eq!(fx.caches.get_simple("42"), None);
    assert_eq!(fx.caches.get_chain("db.page('x')"), None);
}

#[test]
fn identical_probes_share_one_entry() {
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();
    for _ in 0..3 {
        assert_eq!(inferencer.infer_type("http.get('u')"), "HttpResponse");
    }
    assert_eq!(
        fx.caches.get_simple("http.get('u')").as_deref(),
        Some("HttpResponse")
    );
}
