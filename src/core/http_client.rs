use reqwest::Client;

// No timeout override: the upstream call relies on the client library default.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent("bfhl-api-server/1.0").build()
}
