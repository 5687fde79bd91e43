mod show_modified_file;
