//! End-to-end inference over the builtin tables

use crate::helpers::EngineFixture;
use magicscript::ChainResolver;
use rstest::rstest;

#[rstest]
#[case("db.select('select * from user')", "Array")]
#[case("db.selectOne('select * from user')", "Object")]
#[case("db.selectInt('select count(*) from user')", "Integer")]
#[case("db.page('select * from user')", "PageResult")]
#[case("db.insert('insert into t values (1)')", "Object")]
#[case("db.update('update t set a = 1')", "Integer")]
#[case("http.get('http://example.com')", "HttpResponse")]
#[case("http.patch('http://example.com')", "HttpResponse")]
#[case("request.getParameter('id')", "String")]
#[case("request.getValues('tags')", "Array")]
#[case("response.json(result)", "ResponseBuilder")]
#[case("env.get('jdbc.url')", "String")]
#[case("log.info('hello')", "Null")]
#[case("magic.call('get', '/api/user', {})", "Object")]
fn builtin_calls_infer_their_declared_returns(#[case] text: &str, #[case] expected: &str) {
    let fx = EngineFixture::new();
    assert_eq!(fx.inferencer().infer_type(text), expected, "for {:?}", text);
}

#[rstest]
#[case("db.page('sql').list", "Array")]
#[case("userName", "String")]
#[case("items", "Array")]
#[case("rowCount", "Integer")]
#[case("xyz123", "Object")]
#[case("", "Object")]
fn text_probes_always_yield_a_type(#[case] text: &str, #[case] expected: &str) {
    // `page(...).list` is a property access on PageResult; its value type
    // is not catalogued, so the name convention answers Array
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();
    assert_eq!(inferencer.infer_type(text), expected, "for {:?}", text);
}

#[rstest]
#[case("db.select('sql').size()", "Integer")]
#[case("db.select('sql').map(r => r.name).join(',')", "String")]
#[case("db.cache('user-cache').select('sql')", "Array")]
#[case("db.table('sys_user').select()", "Array")]
#[case("http.connect('http://x').param('a', 1).get()", "HttpResponse")]
#[case("http.get('u').body", "Object")]
#[case("response.page(total, list).addCookie('a', 'b')", "ResponseBuilder")]
#[case("request.getParameter('n').asInt()", "Integer")]
fn chains_fold_segment_by_segment(#[case] text: &str, #[case] expected: &str) {
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();
    let resolver = ChainResolver::new(&inferencer);
    assert_eq!(resolver.resolve_type(text), expected, "for {:?}", text);
}

#[test]
fn chain_base_can_be_a_global_function_call() {
    let fx = EngineFixture::new();
    let inferencer = fx.inferencer();
    let resolver = ChainResolver::new(&inferencer);
    assert_eq!(resolver.resolve_type("now().format('yyyy-MM-dd')"), "String");
    assert_eq!(resolver.resolve_type("uuid().length()"), "Integer");
}

#[test]
fn inference_runs_without_any_registered_api() {
    // A bare registry downgrades module calls to plain member lookups
    let fx = EngineFixture::bare();
    let inferencer = fx.inferencer();
    assert_eq!(inferencer.infer_type("42"), "Integer");
    assert_eq!(inferencer.infer_type("db.select('x')"), "Object");
    assert_eq!(inferencer.infer_type("'abc'.length()"), "Object");
}
