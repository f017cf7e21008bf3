/// One benchmark input: a raw request and the buffer sizes it is decoded with.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    request: TestRequest,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, request: TestRequest) -> Self {
        Self { name, group, request }
    }

    pub fn small(name: &'static str, request: TestRequest) -> Self {
        Self::new(name, TestGroup::Small, request)
    }

    pub fn large(name: &'static str, request: TestRequest) -> Self {
        Self::new(name, TestGroup::Large, request)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn request(&self) -> &TestRequest {
        &self.request
    }

    /// Line buffer size: fits the longest line and the body.
    pub fn line_buf_size(&self) -> usize {
        match self.group {
            TestGroup::Small => 256,
            TestGroup::Large => 1024,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestRequest {
    content: &'static [u8],
}

impl TestRequest {
    pub const fn new(content: &'static [u8]) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Large,
}
