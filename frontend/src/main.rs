fn main() {
    attendance_sheet_frontend::start();
}
