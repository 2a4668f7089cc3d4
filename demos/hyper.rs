use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use charmux::{from_fn, BoxHandler, Context, Mux};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

type Body = Full<Bytes>;

// GET /
fn index(_: Context<Incoming>) -> Response<Body> {
    Response::new(Body::from("Hello, world!"))
}

// GET /hello/:name
fn hello(ctx: Context<Incoming>) -> Response<Body> {
    let name = ctx.param("name").unwrap_or("stranger");
    Response::new(Body::from(format!("Hello, {}!", name)))
}

// GET /static/*file
fn file(ctx: Context<Incoming>) -> Response<Body> {
    let file = ctx.param("file").unwrap_or_default();
    Response::new(Body::from(format!("would serve {}", file)))
}

// 404 handler
fn not_found(ctx: Context<Incoming>) -> Response<Body> {
    let mut res = Response::new(Body::from(format!("nothing at {}", ctx.request().uri().path())));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

// Logs every routed request along with the status it got.
fn access_log(next: BoxHandler<Incoming, Body>) -> BoxHandler<Incoming, Body> {
    from_fn(move |ctx: Context<Incoming>| {
        let line = format!("{} {}", ctx.request().method(), ctx.request().uri().path());
        let res = next.call(ctx);
        log::info!("{} -> {}", line, res.status());
        res
    })
}

fn routes() -> Result<Mux<Incoming, Body>, charmux::RouteError> {
    let mut mux = Mux::new();
    mux.not_found(not_found);
    mux.use_middleware(access_log);

    mux.get("/", index)?;
    mux.get("/hello/:name", hello)?;

    let assets = mux.group("/static");
    assets.get("/*file", file)?;

    Ok(mux)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mux = Arc::new(routes()?);
    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;
    log::info!("listening on http://127.0.0.1:3000");

    loop {
        let mux = mux.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request: Request<Incoming>| {
                        let mux = mux.clone();
                        async move { Ok::<_, Infallible>(mux.serve(request)) }
                    }),
                )
                .await
            {
                log::error!("Error serving connection: {:?}", err);
            }
        });
    }
}
