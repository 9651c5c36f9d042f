//! Single-request HTTP stub used by the client tests.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// A server that answers exactly one request with a canned response.
pub struct StubServer {
    /// Base URL to configure the client with.
    pub base_url: String,
    request_line: Receiver<String>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Start a server answering with `status` (e.g. `"200 OK"`) and a JSON `body`.
    pub fn respond_once(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("local address"));
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (sender, request_line) = mpsc::channel();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut first_line = String::new();
            reader.read_line(&mut first_line).expect("read request line");
            loop {
                let mut header = String::new();
                let read = reader.read_line(&mut header).expect("read header");
                if read == 0 || header == "\r\n" {
                    break;
                }
            }
            sender
                .send(first_line.trim_end().to_owned())
                .expect("record request line");
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            stream.flush().expect("flush response");
        });
        Self {
            base_url,
            request_line,
            handle,
        }
    }

    /// Wait for the server thread and return the request line it received.
    pub fn finish(self) -> String {
        let line = self.request_line.recv().expect("request was received");
        self.handle.join().expect("stub server thread");
        line
    }
}

/// A base URL on which nothing is listening.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let address = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{address}")
}
