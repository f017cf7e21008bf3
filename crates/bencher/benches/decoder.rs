use std::hint::black_box;

use bencher::{TestCase, TestRequest};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use micro_wot_http::codec::{BodyPolicy, RequestDecoder};
use micro_wot_http::transport::IoTransport;

static SMALL_HEADER: TestRequest = TestRequest::new(b"GET /properties/on HTTP/1.1\r\nHost: lamp.local\r\n\r\n");

static LARGE_HEADER: TestRequest = TestRequest::new(
    b"PUT /properties/brightness HTTP/1.1\r\n\
      Host: lamp.local\r\n\
      User-Agent: Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0\r\n\
      Accept: application/json, application/td+json;q=0.9, */*;q=0.8\r\n\
      Accept-Language: en-US,en;q=0.5\r\n\
      Accept-Encoding: gzip, deflate\r\n\
      Content-Type: application/json\r\n\
      Content-Length: 46\r\n\
      Origin: http://lamp.local\r\n\
      Connection: close\r\n\
      Cache-Control: no-cache\r\n\
      \r\n\
      {\"value\":80,\"transition\":250,\"unit\":\"percent\"}",
);

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::small("small_header_decoder", SMALL_HEADER), TestCase::large("large_header_decoder", LARGE_HEADER)]
}

fn benchmark_request_decoder(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("request_decoder");

    for policy in [BodyPolicy::ContentLength, BodyPolicy::SingleRead] {
        for case in &test_cases {
            let request_decoder = RequestDecoder::with_body_policy(policy);
            let mut line_buf = vec![0u8; case.line_buf_size()];
            let mut path_buf = [0u8; 64];

            group.throughput(Throughput::Bytes(case.request().content().len() as u64));
            group.bench_with_input(BenchmarkId::new(case.name(), format!("{policy:?}")), case, |b, case| {
                b.iter(|| {
                    let mut transport = IoTransport::new(case.request().content(), std::io::sink());
                    let request = request_decoder
                        .decode(&mut transport, &mut line_buf, &mut path_buf)
                        .expect("input should be a valid thing request");
                    black_box((request.operation, request.content.len()));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(decoder, benchmark_request_decoder);
criterion_main!(decoder);
