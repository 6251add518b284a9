use jsx_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const UDP_RECV_BUFFER: usize = 4096;
const TCP_CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the UDP and TCP listeners on `bind_addr` until `shutdown` fires.
/// Each listener feeds its own nameserver instance.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    udp_handler: DnsServerHandler,
    tcp_handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let udp_socket = Arc::new(create_udp_socket(domain, bind_addr)?);
    let tcp_listener = create_tcp_listener(domain, bind_addr)?;

    info!(bind_address = %bind_addr, "DNS server listening on UDP and TCP");

    let mut join_set: JoinSet<()> = JoinSet::new();
    join_set.spawn(run_udp_listener(
        udp_socket,
        Arc::new(udp_handler),
        shutdown.clone(),
    ));
    join_set.spawn(run_tcp_listener(tcp_listener, tcp_handler, shutdown));

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; UDP_RECV_BUFFER];

    loop {
        let (n, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("UDP listener: shutting down");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = Arc::clone(&handler);
        let socket = Arc::clone(&socket);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw(&query, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) {
    loop {
        let (stream, peer) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("TCP listener: shutting down");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "TCP accept error");
                    continue;
                }
            },
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = stream.set_nodelay(true) {
                debug!(client = %peer, error = %e, "Failed to set TCP_NODELAY");
            }
            let served = tokio::time::timeout(
                TCP_CONNECTION_TIMEOUT,
                handler.serve_tcp_connection(stream, peer),
            )
            .await;
            match served {
                Ok(Ok(())) => {}
                Ok(Err(e)) => debug!(client = %peer, error = %e, "TCP connection error"),
                Err(_) => debug!(client = %peer, "TCP connection timed out"),
            }
        });
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_udp_and_tcp_bind_same_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let tcp = create_tcp_listener(Domain::IPV4, addr).unwrap();
        let port = tcp.local_addr().unwrap().port();

        let udp = create_udp_socket(Domain::IPV4, SocketAddr::new(addr.ip(), port)).unwrap();
        assert_eq!(udp.local_addr().unwrap().port(), port);
    }
}
