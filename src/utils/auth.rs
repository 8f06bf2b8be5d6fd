//! Fixed-credential login gate carried over from the desktop build.
//! A stub boundary check, not real authentication.

const USERNAME: &str = "admin";
const PASSWORD: &str = "1234";

pub fn authenticate(username: &str, password: &str) -> bool {
    username == USERNAME && password == PASSWORD
}
