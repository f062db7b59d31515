use nine_knights::protocol::{Message, PROTOCOL_VERSION};
use nine_knights::transport::{tcp::TcpTransport, Transport};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

#[tokio::test(flavor = "multi_thread")]
async fn frames_cross_a_socket_both_ways() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut transport = TcpTransport::new(stream);
        let msg = transport.recv().await.unwrap();
        transport.send(msg).await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let sent = Message::TakeTurn {
        version: PROTOCOL_VERSION,
        seq: 7,
        payload: b"snapshot".to_vec(),
    };
    client.send(sent.clone()).await?;
    assert_eq!(client.recv().await?, sent);

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_peer_surfaces_as_an_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        drop(stream);
    });

    let mut client = TcpTransport::connect(addr).await?;
    server.await?;
    assert!(client.recv().await.is_err());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn oversized_length_prefix_is_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        // Claim a frame far beyond the accepted bound.
        stream.write_all(&u32::MAX.to_be_bytes()).await.unwrap();
        stream.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    assert!(client.recv().await.is_err());
    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_frame_is_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let garbage = [0xffu8; 16];
        stream
            .write_all(&(garbage.len() as u32).to_be_bytes())
            .await
            .unwrap();
        stream.write_all(&garbage).await.unwrap();
        stream.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    assert!(client.recv().await.is_err());
    server.await?;
    Ok(())
}
