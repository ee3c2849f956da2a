//! Reads the real process environment, so it lives in its own test binary
//! with a single test.

use server::startup;

#[tokio::test]
async fn port_env_reaches_listener() -> anyhow::Result<()> {
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");
    std::env::set_var("HOST", "127.0.0.1");

    std::env::remove_var("PORT");
    let cfg = startup::load_config()?;
    assert_eq!(cfg.server.port, 3001);

    // reserve a free port, release it, then hand it to the server via PORT
    let free = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await?;
    let port = free.local_addr()?.port();
    drop(free);

    std::env::set_var("PORT", port.to_string());
    let cfg = startup::load_config()?;
    assert_eq!(cfg.server.port, port);
    assert_eq!(cfg.server.host, "127.0.0.1");

    let listener = startup::bind(&cfg.server).await?;
    assert_eq!(listener.local_addr()?.port(), port);

    std::env::set_var("PORT", "");
    assert_eq!(startup::load_config()?.server.port, 3001);
    Ok(())
}
