//! Routes a handful of requests in-process and prints what comes back.
//!
//! Run with `RUST_LOG=charmux=trace` to watch the dispatch decisions.

use charmux::{from_fn, BoxHandler, Context, Mux};
use http::{Request, Response};

fn greet(ctx: Context<()>) -> Response<String> {
    Response::new(format!("Hello, {}", ctx.param("name").unwrap_or("World")))
}

fn params(ctx: Context<()>) -> Response<String> {
    Response::new(ctx.params().to_string())
}

fn server_header(next: BoxHandler<(), String>) -> BoxHandler<(), String> {
    from_fn(move |ctx: Context<()>| {
        let mut res = next.call(ctx);
        res.headers_mut()
            .insert("server", http::HeaderValue::from_static("charmux"));
        res
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut mux: Mux<(), String> = Mux::new();
    mux.use_middleware(server_header);

    mux.get("/", greet)?;
    mux.get("/hello/:name", greet)?;
    mux.get("/files/:dir/*path", params)?;

    let api = mux.group("/api/v1");
    api.post("/users/:id", params)?;

    let requests = [
        ("GET", "/"),
        ("GET", "/hello/rustacean"),
        ("GET", "/files/docs/guide/intro.md"),
        ("POST", "/api/v1/users/42"),
        ("GET", "/api/v1/users/42"),
        ("GET", "/nope"),
    ];

    for (method, path) in requests {
        let req = Request::builder().method(method).uri(path).body(())?;
        let res = mux.serve(req);
        println!("{:7} {:30} {} {:?}", method, path, res.status(), res.body());
    }

    println!("allowed on /api/v1/users/42: {:?}", mux.allowed("/api/v1/users/42"));
    Ok(())
}
