use jsx_dns_domain::{RecordData, ResourceRecord};
use jsx_dns_infrastructure::dns::codec::encode_response;
use jsx_dns_infrastructure::dns::transport::framing::{
    read_with_length_prefix, send_with_length_prefix, FrameBuffer,
};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// What the mock upstream does with each query.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answers with records owned by the queried name.
    Answer {
        answers: Vec<(RecordData, u32)>,
        authorities: Vec<ResourceRecord>,
    },
    Silent,
    WrongId,
    Garbage,
}

impl Reply {
    pub fn a(ip: [u8; 4], ttl: u32) -> Self {
        Self::Answer {
            answers: vec![(RecordData::A(ip.into()), ttl)],
            authorities: Vec::new(),
        }
    }

    pub fn records(answers: Vec<(RecordData, u32)>) -> Self {
        Self::Answer {
            answers,
            authorities: Vec::new(),
        }
    }

    fn respond(&self, query: &[u8]) -> Option<Vec<u8>> {
        let message = Message::from_vec(query).ok()?;
        let name = message
            .queries()
            .first()
            .map(|q| q.name().to_utf8().trim_end_matches('.').to_string())
            .unwrap_or_default();

        match self {
            Reply::Silent => None,
            Reply::Garbage => Some(vec![0xde, 0xad, 0xbe, 0xef]),
            Reply::WrongId => {
                let answers = vec![ResourceRecord::new(
                    name.as_str(),
                    RecordData::A([6, 6, 6, 6].into()),
                    60,
                )];
                encode_response(
                    message.id().wrapping_add(1),
                    message.queries(),
                    &answers,
                    &[],
                )
                .ok()
            }
            Reply::Answer {
                answers,
                authorities,
            } => {
                let answers: Vec<ResourceRecord> = answers
                    .iter()
                    .map(|(data, ttl)| ResourceRecord::new(name.as_str(), data.clone(), *ttl))
                    .collect();
                encode_response(message.id(), message.queries(), &answers, authorities).ok()
            }
        }
    }
}

/// In-process upstream on 127.0.0.1 speaking either UDP or TCP.
pub struct MockDnsServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn udp(reply: Reply) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = reply.respond(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub async fn tcp(reply: Reply) -> Self {
        Self::tcp_with(reply, false).await
    }

    /// Writes each response one byte at a time.
    pub async fn tcp_trickle(reply: Reply) -> Self {
        Self::tcp_with(reply, true).await
    }

    async fn tcp_with(reply: Reply, trickle: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let reply = reply.clone();
                            tokio::spawn(serve_tcp(stream, reply, trickle));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, reply: Reply, trickle: bool) {
    let mut frames = FrameBuffer::new();
    let Ok(query) = read_with_length_prefix(&mut stream, &mut frames).await else {
        return;
    };
    let Some(response) = reply.respond(&query) else {
        // Hold the connection open so the client times out.
        tokio::time::sleep(Duration::from_secs(30)).await;
        return;
    };

    if trickle {
        let mut framed = (response.len() as u16).to_be_bytes().to_vec();
        framed.extend_from_slice(&response);
        for byte in framed {
            if stream.write_all(&[byte]).await.is_err() {
                return;
            }
            let _ = stream.flush().await;
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    } else {
        let _ = send_with_length_prefix(&mut stream, &response).await;
    }
    let _ = stream.shutdown().await;
}

/// An address nothing listens on.
pub async fn dead_udp_addr() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}
