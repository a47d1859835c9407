fn main() {
    storefront_web::start();
}
