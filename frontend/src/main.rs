fn main() {
    peeps_frontend::boot();
}
