use charmux::{MatchError, Node, Params};

macro_rules! match_tests {
    ($($name:ident {
        routes = $routes:expr,
        $( $path:literal :: $route:literal =>
            $( $(@$none:tt)? None )?
            $( $(@$some:tt)? { $( $key:literal => $val:literal ),* $(,)? } )?
        ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut tree = Node::new();

            for route in $routes {
                tree.insert(route, route.to_owned()).unwrap();
            }

            $(match tree.at($path) {
                Err(_) => {
                    $($( @$some )?
                        panic!("Expected value for route '{}'", $path)
                    )?
                }
                Ok(value) => {
                    $($( @$some )?
                        if value != $route {
                            panic!(
                                "Wrong value for route '{}'. Expected '{}', found '{}')",
                                $path, $route, value
                            );
                        }

                        let params = Params::from_match($path, value).unwrap();
                        let mut got_params = params.iter().collect::<Vec<_>>();
                        got_params.sort_unstable();

                        let mut expected_params: Vec<(&str, &str)> = vec![$(($key, $val)),*];
                        expected_params.sort_unstable();

                        assert_eq!(
                            got_params, expected_params,
                            "Wrong params for route '{}'",
                            $path
                        );
                    )?

                    $($( @$none )?
                        panic!("Unexpected value for route '{}', got: {:?}", $path, value);
                    )?
                }
            })*
        }
   )* };
}

match_tests! {
    basic {
        routes = [
            "/hi",
            "/contact",
            "/co",
            "/c",
            "/a",
            "/ab",
            "/doc/",
            "/doc/rust_faq.html",
            "/ʯ",
            "/β",
        ],
        "/a"                  :: "/a"                  => {},
        "/"                   :: ""                    => None,
        "/hi"                 :: "/hi"                 => {},
        "/contact"            :: "/contact"            => {},
        "/co"                 :: "/co"                 => {},
        "/c"                  :: "/c"                  => {},
        "/con"                :: ""                    => None,
        "/cona"               :: ""                    => None,
        "/no"                 :: ""                    => None,
        "/ab"                 :: "/ab"                 => {},
        "/doc/"               :: "/doc/"               => {},
        "/doc/rust_faq.html"  :: "/doc/rust_faq.html"  => {},
        "/doc/rust"           :: ""                    => None,
        "/ʯ"                  :: "/ʯ"                  => {},
        "/β"                  :: "/β"                  => {}
    },
    samples {
        routes = [
            "/hello/:name",
            "/hello/:namea/people/:name",
            "/home/*",
            "/very/:name/*",
            "/this/:is/:war",
            "/practical/",
            "/practical/joke/",
            "/hell/:one/:one",
        ],
        "/hello/world"                       :: "/hello/:name"               => { "name" => "world" },
        "/hello/:namea/people/:name"         :: "/hello/:namea/people/:name" => { "namea" => ":namea", "name" => ":name" },
        "/hello/rob/people/bob"              :: "/hello/:namea/people/:name" => { "namea" => "rob", "name" => "bob" },
        "/home/alone"                        :: "/home/*"                    => { "catch" => "alone" },
        "/very/complex/complicate/too/much"  :: "/very/:name/*"              => { "name" => "complex", "catch" => "complicate/too/much" },
        "/this/:is/:war"                     :: "/this/:is/:war"             => { "is" => ":is", "war" => ":war" },
        "/practical/"                        :: "/practical/"                => {},
        "/practical/joke/"                   :: "/practical/joke/"           => {},
        "/hell/:one/:one"                    :: "/hell/:one/:one"            => { "one" => ":one" },
        "/hell/a/b"                          :: "/hell/:one/:one"            => { "one" => "b" },
        "/hello/"                            :: ""                           => None,
        "/hello/world/"                      :: ""                           => None,
        "/home"                              :: ""                           => None,
    },
    wildcard {
        routes = [
            "/",
            "/cmd/:tool/",
            "/cmd/:tool/:sub",
            "/cmd/whoami",
            "/cmd/whoami/root",
            "/src/*filepath",
            "/search/",
            "/search/:query",
            "/search/rust-lang",
            "/files/:dir/*filepath",
            "/info/:user/public",
            "/info/:user/project/:project",
            "/info/:user/project/rustlang",
        ],
        "/"                              :: "/"                            => {},
        "/cmd/test/"                     :: "/cmd/:tool/"                  => { "tool" => "test" },
        "/cmd/test/3"                    :: "/cmd/:tool/:sub"              => { "tool" => "test", "sub" => "3" },
        "/cmd/whoami"                    :: "/cmd/whoami"                  => {},
        "/cmd/whoami/"                   :: ""                             => None,
        "/cmd/whoami/root"               :: "/cmd/whoami/root"             => {},
        "/cmd/who/"                      :: ""                             => None,
        "/src/some/file.png"             :: "/src/*filepath"               => { "filepath" => "some/file.png" },
        "/src/a"                         :: "/src/*filepath"               => { "filepath" => "a" },
        "/src/"                          :: ""                             => None,
        "/search/"                       :: "/search/"                     => {},
        "/search/actix"                  :: "/search/:query"               => { "query" => "actix" },
        "/search/rust-lang"              :: "/search/rust-lang"            => {},
        "/search/someth!ng+in+ünìcodé"   :: "/search/:query"               => { "query" => "someth!ng+in+ünìcodé" },
        "/search/someth!ng+in+ünìcodé/"  :: ""                             => None,
        "/files/js/inc/framework.js"     :: "/files/:dir/*filepath"        => { "dir" => "js", "filepath" => "inc/framework.js" },
        "/info/gordon/public"            :: "/info/:user/public"           => { "user" => "gordon" },
        "/info/gordon/project/go"        :: "/info/:user/project/:project" => { "user" => "gordon", "project" => "go" },
        "/info/gordon/project/rustlang"  :: "/info/:user/project/rustlang" => { "user" => "gordon" },
    },
    no_backtracking {
        routes = [
            "/search/:query",
            "/search/rust-lang",
            "/info/:user/project/:project",
            "/info/:user/project/rustlang",
        ],
        "/search/go"                     :: "/search/:query"               => { "query" => "go" },
        "/search/rust"                   :: ""                             => None,
        "/search/rust-lang"              :: "/search/rust-lang"            => {},
        "/info/gordon/project/rust"      :: ""                             => None,
    },
    catch_all_siblings {
        routes = [
            "/static/*",
            "/static/index.html",
            "/hello/world",
            "/hello/*rest",
            "/files/:dir/*path",
        ],
        "/static/app.js"                 :: "/static/*"                    => { "catch" => "app.js" },
        "/static/in"                     :: "/static/*"                    => { "catch" => "in" },
        "/static/index.html"             :: "/static/*"                    => { "catch" => "index.html" },
        "/hello/wonder"                  :: "/hello/*rest"                 => { "rest" => "wonder" },
        "/hello/world"                   :: "/hello/*rest"                 => { "rest" => "world" },
        "/files/js/a/b.js"               :: "/files/:dir/*path"            => { "dir" => "js", "path" => "a/b.js" },
        "/static/"                       :: ""                             => None,
        "/hello"                         :: ""                             => None,
    },
    unicode {
        routes = [
            "/café/:id",
            "/日本/*rest",
            "/ß",
        ],
        "/café/42"        :: "/café/:id"   => { "id" => "42" },
        "/日本/東京/渋谷" :: "/日本/*rest" => { "rest" => "東京/渋谷" },
        "/ß"              :: "/ß"          => {},
        "/cafe/42"        :: ""            => None,
    },
}

#[test]
fn trailing_slash_hop() {
    let mut tree = Node::new();
    tree.insert("/doc/", "doc").unwrap();
    tree.insert("/cmd/:tool/", "tool").unwrap();

    assert_eq!(tree.at("/doc"), Ok(&"doc"));
    assert_eq!(tree.at("/doc/"), Ok(&"doc"));
    assert_eq!(tree.at("/cmd/test"), Ok(&"tool"));
    assert_eq!(tree.at("/cmd/test/"), Ok(&"tool"));
    assert_eq!(tree.at("/cmd/"), Err(MatchError::NotFound));
}

#[test]
fn literal_wins_over_param() {
    let mut tree = Node::new();
    tree.insert("/:page", "param").unwrap();
    tree.insert("/about", "literal").unwrap();

    assert_eq!(tree.at("/about"), Ok(&"literal"));
    assert_eq!(tree.at("/contact"), Ok(&"param"));
    assert_eq!(tree.at("/contact/us"), Err(MatchError::NotFound));
    assert_eq!(tree.at("/"), Err(MatchError::NotFound));
}

#[test]
fn catch_all_wins_over_literal_and_param() {
    let mut tree = Node::new();
    tree.insert("/about", "literal").unwrap();
    tree.insert("/:page", "param").unwrap();
    tree.insert("/*rest", "catch-all").unwrap();

    assert_eq!(tree.at("/about"), Ok(&"catch-all"));
    assert_eq!(tree.at("/contact"), Ok(&"catch-all"));
    assert_eq!(tree.at("/contact/us"), Ok(&"catch-all"));
    assert_eq!(tree.at("/"), Err(MatchError::NotFound));
}

#[test]
fn precedence_ignores_insertion_order() {
    let patterns = ["/about", "/:page", "/*rest", "/files/*rest"];

    let mut forward = Node::new();
    for pattern in patterns {
        forward.insert(pattern, pattern).unwrap();
    }

    let mut backward = Node::new();
    for pattern in patterns.iter().rev() {
        backward.insert(*pattern, *pattern).unwrap();
    }

    for path in ["/about", "/contact", "/files/a/b", "/files", "/x/y/z"] {
        assert_eq!(forward.at(path), backward.at(path), "{}", path);
    }
}

#[test]
fn duplicate_patterns_resolve_to_first() {
    let mut tree = Node::new();
    tree.insert("/users/:id", 1).unwrap();
    tree.insert("/users/:name", 2).unwrap();
    tree.insert("/users/:id", 3).unwrap();

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.at("/users/7"), Ok(&1));
}

#[test]
fn insert_empty_pattern() {
    let mut tree = Node::new();
    tree.insert("/hello/:name", ()).unwrap();

    assert!(tree.insert("", ()).is_err());
    assert_eq!(tree.len(), 1);
}
