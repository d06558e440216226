mod workbook;
